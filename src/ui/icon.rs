use leptos::prelude::*;

/// Inline icon loaded from `/icons/{name}.svg`
#[component]
pub fn Icon(
    /// Icon file name without the .svg extension
    name: &'static str,
    /// CSS classes for sizing and color
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=""
            aria-hidden="true"
            draggable=false
        />
    }
}

/// Icon names shipped in `public/icons`
pub mod icons {
    pub const ARROW_LEFT: &str = "arrow-left";
    pub const ARROW_RIGHT: &str = "arrow-right";
    pub const CHEVRON_DOWN: &str = "chevron-down";
    pub const CHECK: &str = "check";
    pub const X: &str = "x";
    pub const MENU: &str = "menu";
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const PHONE: &str = "phone";
    pub const MAIL: &str = "mail";
    pub const MAP_PIN: &str = "map-pin";
    pub const CLOCK: &str = "clock";
}
