//! `{{name}}` substitution.

use crate::interpreter::EvalError;
use crate::parser::find_placeholders;
use crate::types::{Quantity, Variables};

/// Name of the placeholder filled from the `quantity` option.
pub const QUANTITY_PLACEHOLDER: &str = "{{quantity}}";

/// Substitute variables, then the quantity, into `text`.
///
/// Each `(name, value)` replaces every `{{name}}` (case-sensitive). The
/// quantity then replaces every `{{quantity}}` that is left, so a variable
/// named `quantity` takes precedence over the quantity option.
///
/// Fails with [`EvalError::MissingInterpolationVariable`] if any `{{...}}`
/// token remains. This check does not depend on `throw_on_error`.
///
/// # Example
///
/// ```
/// use glossa::{Quantity, interpolate, vars};
///
/// let ada = vars! { "name" => "Ada" };
/// let text = interpolate("{{name}} has {{quantity}} apples", &ada, Some(Quantity::from(3))).unwrap();
/// assert_eq!(text, "Ada has 3 apples");
///
/// let text = interpolate("{{quantity}} km", &ada, Some(Quantity::from(1.5))).unwrap();
/// assert_eq!(text, "1.5 km");
///
/// assert!(interpolate("Hi {{name}}", &vars! {}, None).is_err());
/// ```
pub fn interpolate(
    text: &str,
    variables: &Variables,
    quantity: Option<Quantity>,
) -> Result<String, EvalError> {
    let result = substitute(text, variables, quantity);
    let unresolved = unresolved_placeholders(&result);
    if unresolved.is_empty() {
        Ok(result)
    } else {
        Err(EvalError::MissingInterpolationVariable {
            key: None,
            placeholders: unresolved,
        })
    }
}

/// Perform both substitution passes without validating the result.
pub(crate) fn substitute(
    text: &str,
    variables: &Variables,
    quantity: Option<Quantity>,
) -> String {
    let mut result = text.to_string();
    for (name, value) in variables {
        let placeholder = format!("{{{{{name}}}}}");
        if result.contains(&placeholder) {
            result = result.replace(&placeholder, &value.to_string());
        }
    }
    if let Some(quantity) = quantity {
        if variables.contains_key("quantity") {
            tracing::debug!("'quantity' variable shadows the quantity option");
        }
        result = result.replace(QUANTITY_PLACEHOLDER, &quantity.to_string());
    }
    result
}

/// All `{{...}}` tokens still present in `text`.
pub(crate) fn unresolved_placeholders(text: &str) -> Vec<String> {
    find_placeholders(text)
        .into_iter()
        .map(str::to_string)
        .collect()
}
