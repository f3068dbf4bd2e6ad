use scraper::ElementRef;

/// Text-like inputs become `combobox` when bound to a `<datalist>` via `list`.
fn with_list(element: ElementRef<'_>, plain: &'static str) -> &'static str {
    if element.value().attr("list").is_some_and(|l| !l.is_empty()) {
        "combobox"
    } else {
        plain
    }
}

/// Role of an `<input>` from its `type`. An input without a `type` attribute,
/// or with a type that has no implicit role (hidden, password, date, ...), has none.
pub fn input_role(element: ElementRef<'_>) -> Option<&'static str> {
    let input_type = element.value().attr("type")?.to_ascii_lowercase();
    let role = match input_type.as_str() {
        "button" | "image" | "reset" | "submit" => "button",
        "checkbox" => "checkbox",
        "number" => "spinbutton",
        "radio" => "radio",
        "range" => "slider",
        "search" => with_list(element, "searchbox"),
        "email" | "tel" | "text" | "url" => with_list(element, "textbox"),
        _ => return None,
    };
    Some(role)
}

/// Leading decimal digits of `value`, like `parseInt` does.
fn leading_int(value: &str) -> Option<i64> {
    let trimmed = value.trim_start();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

/// `listbox` for a multi-select or a select showing more than one row, else `combobox`.
pub fn select_role(element: ElementRef<'_>) -> &'static str {
    let multiple = element.value().attr("multiple").is_some();
    let tall = element
        .value()
        .attr("size")
        .and_then(leading_int)
        .is_some_and(|size| size > 1);
    if multiple || tall {
        "listbox"
    } else {
        "combobox"
    }
}
