use leptos::prelude::*;

/// Tooltip position relative to the target element
#[derive(Clone, Copy, PartialEq)]
pub enum TooltipPosition {
    Top,
    Bottom,
    Left,
    Right,
}

impl TooltipPosition {
    fn class(&self) -> &'static str {
        match self {
            TooltipPosition::Top => "bottom-full left-1/2 -translate-x-1/2 mb-2",
            TooltipPosition::Bottom => "top-full left-1/2 -translate-x-1/2 mt-2",
            TooltipPosition::Left => "right-full top-1/2 -translate-y-1/2 mr-2",
            TooltipPosition::Right => "left-full top-1/2 -translate-y-1/2 ml-2",
        }
    }
}

/// Tooltip shown while its trigger is hovered or focused
#[component]
pub fn Tooltip(
    /// Tooltip element id, referenced by `aria-describedby`
    id: String,
    /// The content to show in the tooltip
    text: String,
    /// The element that triggers the tooltip
    children: Children,
    /// Position of the tooltip relative to the trigger
    #[prop(default = TooltipPosition::Top)]
    position: TooltipPosition,
) -> impl IntoView {
    let (is_visible, set_is_visible) = signal(false);

    let tooltip_class = format!(
        "absolute z-10 w-max max-w-xs px-3 py-2 text-sm font-medium text-brand-creamWhite bg-brand-charcoalBlack rounded-md shadow-lg transition-opacity duration-200 ease-out {}",
        position.class()
    );
    let described_by = id.clone();

    view! {
        <div class="relative inline-block">
            <div
                tabindex="0"
                aria-describedby=move || is_visible.get().then(|| described_by.clone())
                on:mouseenter=move |_| set_is_visible.set(true)
                on:mouseleave=move |_| set_is_visible.set(false)
                on:focus=move |_| set_is_visible.set(true)
                on:blur=move |_| set_is_visible.set(false)
            >
                {children()}
            </div>
            <Show when=move || is_visible.get()>
                <div id=id.clone() role="tooltip" class=tooltip_class.clone()>
                    {text.clone()}
                </div>
            </Show>
        </div>
    }
}
