use crate::ui::icon::Icon;
use leptos::prelude::*;

/// Button variant types
#[derive(Clone, Copy, PartialEq)]
pub enum ButtonVariant {
    /// Safety orange call to action
    Cta,
    /// Charcoal outline on light backgrounds
    Outline,
    /// Text only
    Ghost,
}

/// Button size options
#[derive(Clone, Copy, PartialEq)]
pub enum ButtonSize {
    Small,
    Medium,
    Large,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Cta => {
                "bg-brand-safetyOrange hover:bg-brand-safetyOrangeDarker text-white shadow-md hover:shadow-lg"
            }
            ButtonVariant::Outline => {
                "border border-brand-charcoalBlack text-brand-charcoalBlack hover:bg-brand-charcoalBlack hover:text-brand-creamWhite"
            }
            ButtonVariant::Ghost => "text-gray-600 hover:text-gray-900",
        }
    }
}

impl ButtonSize {
    fn class(&self) -> &'static str {
        match self {
            ButtonSize::Small => "py-2 px-4 text-sm",
            ButtonSize::Medium => "py-3 px-8",
            ButtonSize::Large => "py-4 px-10 text-lg",
        }
    }
}

const BASE_CLASSES: &str = "inline-flex items-center justify-center font-semibold rounded-lg transition-all duration-200 focus:outline-none focus-visible:ring-2 focus-visible:ring-brand-safetyOrange focus-visible:ring-offset-2";

fn classes(variant: ButtonVariant, size: ButtonSize, class: &str) -> String {
    let base = format!("{} {} {}", BASE_CLASSES, variant.class(), size.class());
    if class.is_empty() {
        base
    } else {
        format!("{} {}", base, class)
    }
}

/// Link styled as a call-to-action button
#[component]
pub fn CtaButton(
    /// Link target
    href: &'static str,
    /// Button content
    children: Children,
    /// Visual variant
    #[prop(default = ButtonVariant::Cta)]
    variant: ButtonVariant,
    /// Button size
    #[prop(default = ButtonSize::Medium)]
    size: ButtonSize,
    /// Optional icon shown after the text
    #[prop(optional)]
    icon: Option<&'static str>,
    /// Additional CSS classes
    #[prop(default = String::new())]
    class: String,
) -> impl IntoView {
    view! {
        <a href=href class=classes(variant, size, &class)>
            {children()}
            {icon.map(|name| view! { <Icon name=name class="ml-2 h-4 w-4"/> })}
        </a>
    }
}

/// Form submit button with a pending state
#[component]
pub fn SubmitButton(
    /// Whether a submission is in flight
    #[prop(into)]
    pending: Signal<bool>,
    /// Label while idle
    label: &'static str,
    /// Label while pending
    #[prop(default = "Sending...")]
    pending_label: &'static str,
    /// Additional CSS classes
    #[prop(default = String::new())]
    class: String,
) -> impl IntoView {
    let full_classes = classes(
        ButtonVariant::Cta,
        ButtonSize::Medium,
        &format!("w-full disabled:opacity-60 disabled:cursor-not-allowed {}", class),
    );

    view! {
        <button type="submit" class=full_classes disabled=move || pending.get()>
            {move || if pending.get() { pending_label } else { label }}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cta_classes_carry_brand_colors() {
        let class = classes(ButtonVariant::Cta, ButtonSize::Medium, "");

        assert!(class.contains("bg-brand-safetyOrange"));
        assert!(class.contains("py-3 px-8"));
        assert!(!class.ends_with(' '));
    }

    #[test]
    fn test_extra_classes_are_appended() {
        let class = classes(ButtonVariant::Ghost, ButtonSize::Small, "w-full");

        assert!(class.ends_with("w-full"));
    }
}
