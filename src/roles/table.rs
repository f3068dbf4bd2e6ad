use crate::dom;
use scraper::ElementRef;

/// Role of a `<td>`/`<th>`, decided by the closest enclosing `<table>`:
/// a plain table gives `cell`, a grid gives `gridcell`. Outside a table, or
/// inside a table with any other role, the cell has none.
pub fn cell_role(element: ElementRef<'_>) -> Option<&'static str> {
    let table = dom::ancestors(element).find(|el| dom::tag(*el) == "table")?;
    match table.value().attr("role") {
        None | Some("table") => Some("cell"),
        Some("grid") | Some("treegrid") => Some("gridcell"),
        Some(_) => None,
    }
}
