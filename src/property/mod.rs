//! 매물 입력 레코드와 입력 검증기.

pub mod fields;
pub mod input;
pub mod validation;

pub use fields::{Field, FieldKind};
pub use input::{FieldSource, FieldValue, PropertyInput, RawPropertyInput, ValidatedInput};
pub use validation::{validate, ValidationError, ValidationRule};
