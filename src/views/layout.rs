//! Vertical navigation layout wrapping every employee page.

use crate::ui::navigator::Route;

const ICONS: [Route; 2] = [Route::Bills, Route::NewBill];

/// Wraps `content` in the layout, highlighting the icon of `active`.
#[must_use]
pub fn render(active: Route, content: &str) -> String {
    let icons: String = ICONS
        .into_iter()
        .enumerate()
        .map(|(i, route)| {
            let class = if route == active {
                " class=\"active-icon\""
            } else {
                ""
            };
            format!(
                r#"<div id="layout-icon{}" data-testid="{}"{class}></div>"#,
                i + 1,
                route.icon()
            )
        })
        .collect();

    format!(
        r#"<div class="layout"><div class="vertical-navbar"><div class="layout-title">Bill Buddy</div>{icons}<div class="layout-disconnect" id="layout-disconnect"></div></div><div class="content">{content}</div></div>"#
    )
}
