pub mod batch_mapper;
pub mod catalog_mapper;
pub mod faculty_mapper;
pub mod roster_mapper;
pub mod slot_mapper;

pub use batch_mapper::BatchMapper;
pub use catalog_mapper::CatalogMapper;
pub use faculty_mapper::FacultyMapper;
pub use roster_mapper::RosterMapper;
pub use slot_mapper::SlotMapper;
