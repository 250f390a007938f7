pub mod collection;
pub mod quotation;
