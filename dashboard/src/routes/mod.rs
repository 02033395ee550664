pub mod options;
pub mod page;
pub mod view;
