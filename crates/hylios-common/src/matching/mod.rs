pub mod hiring;
pub mod location;
pub mod recommendations;
pub mod scoring;
pub mod skills;
pub mod weights;
pub mod work_type;
