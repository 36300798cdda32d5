use leptos::prelude::*;

/// Small pill used for counters such as the `+N` overflow of a selection
#[component]
pub fn Badge(
    /// "primary", "warning" or "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Hover text
    #[prop(optional, into)]
    title: MaybeProp<String>,
    children: Children,
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "primary" => "badge--primary",
        "warning" => "badge--warning",
        _ => "badge--neutral",
    };

    view! {
        <span
            class=move || format!("badge {} {}", variant_class(), class.get().unwrap_or_default())
            title=move || title.get()
        >
            {children()}
        </span>
    }
}
