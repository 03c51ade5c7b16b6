/// Page service interface
pub mod page;
/// Space service interface
pub mod space;
