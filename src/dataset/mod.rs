
mod person;
pub use person::*;

pub trait Dataset<const SIZE: usize> {
    fn examples(&self) -> Vec<LabeledExample<SIZE>>;
    fn class_name(&self, class: u8) -> Option<String>;
}
