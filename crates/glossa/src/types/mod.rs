mod locale_id;
mod plural_category;
mod quantity;
mod translation;
mod value;

pub use locale_id::LocaleId;
pub use plural_category::PluralCategory;
pub use quantity::Quantity;
pub use translation::{Namespace, PluralForms, TranslationValue};
pub use value::{Value, Variables};
