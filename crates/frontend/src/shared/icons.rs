use leptos::prelude::*;

fn svg(body: AnyView) -> AnyView {
    view! {
        <svg width="18" height="18" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
            {body}
        </svg>
    }
    .into_any()
}

/// Inline stroke icon by name; unknown names render nothing.
pub fn icon(name: &str) -> AnyView {
    match name {
        "dashboard" => svg(view! {
            <rect x="3" y="3" width="7" height="9" rx="1"/>
            <rect x="14" y="3" width="7" height="5" rx="1"/>
            <rect x="14" y="12" width="7" height="9" rx="1"/>
            <rect x="3" y="16" width="7" height="5" rx="1"/>
        }.into_any()),
        "masters" => svg(view! {
            <path d="M4 4h16v4H4z"/>
            <path d="M4 10h16v4H4z"/>
            <path d="M4 16h16v4H4z"/>
        }.into_any()),
        "door" => svg(view! {
            <path d="M6 21V4a1 1 0 0 1 1-1h10a1 1 0 0 1 1 1v17"/>
            <path d="M3 21h18"/>
            <circle cx="15" cy="12" r="1"/>
        }.into_any()),
        "palette" => svg(view! {
            <circle cx="12" cy="12" r="9"/>
            <circle cx="8" cy="10" r="1"/>
            <circle cx="12" cy="7" r="1"/>
            <circle cx="16" cy="10" r="1"/>
        }.into_any()),
        "map-pin" => svg(view! {
            <path d="M21 10c0 7-9 13-9 13s-9-6-9-13a9 9 0 0 1 18 0z"/>
            <circle cx="12" cy="10" r="3"/>
        }.into_any()),
        "map" => svg(view! {
            <path d="M1 6v16l7-4 8 4 7-4V2l-7 4-8-4-7 4z"/>
            <path d="M8 2v16"/>
            <path d="M16 6v16"/>
        }.into_any()),
        "truck" => svg(view! {
            <rect x="1" y="3" width="15" height="13"/>
            <path d="M16 8h4l3 3v5h-7V8z"/>
            <circle cx="5.5" cy="18.5" r="2.5"/>
            <circle cx="18.5" cy="18.5" r="2.5"/>
        }.into_any()),
        "tag" => svg(view! {
            <path d="M20.59 13.41 13.42 20.58a2 2 0 0 1-2.83 0L2 12V2h10l8.59 8.59a2 2 0 0 1 0 2.82z"/>
            <circle cx="7" cy="7" r="1"/>
        }.into_any()),
        "clock" => svg(view! {
            <circle cx="12" cy="12" r="10"/>
            <path d="M12 6v6l4 2"/>
        }.into_any()),
        "ruler" => svg(view! {
            <path d="M21.3 8.7 8.7 21.3a1 1 0 0 1-1.4 0l-4.6-4.6a1 1 0 0 1 0-1.4L15.3 2.7a1 1 0 0 1 1.4 0l4.6 4.6a1 1 0 0 1 0 1.4z"/>
            <path d="m7.5 10.5 2 2"/>
            <path d="m10.5 7.5 2 2"/>
            <path d="m13.5 4.5 2 2"/>
        }.into_any()),
        "users" | "hrm" => svg(view! {
            <path d="M17 21v-2a4 4 0 0 0-4-4H7a4 4 0 0 0-4 4v2"/>
            <circle cx="9" cy="7" r="4"/>
            <path d="M23 21v-2a4 4 0 0 0-3-3.87"/>
            <path d="M16 3.13a4 4 0 0 1 0 7.75"/>
        }.into_any()),
        "crm" | "customers" => svg(view! {
            <path d="M20 21v-2a4 4 0 0 0-4-4H8a4 4 0 0 0-4 4v2"/>
            <circle cx="12" cy="7" r="4"/>
        }.into_any()),
        "orders" => svg(view! {
            <circle cx="9" cy="21" r="1"/>
            <circle cx="20" cy="21" r="1"/>
            <path d="M1 1h4l2.68 12.39a2 2 0 0 0 2 1.61h7.72a2 2 0 0 0 2-1.61L23 6H6"/>
        }.into_any()),
        "growth" => svg(view! {
            <path d="M23 6l-9.5 9.5-5-5L1 18"/>
            <path d="M17 6h6v6"/>
        }.into_any()),
        "user" => svg(view! {
            <circle cx="12" cy="8" r="4"/>
            <path d="M4 21a8 8 0 0 1 16 0"/>
        }.into_any()),
        "log-out" => svg(view! {
            <path d="M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4"/>
            <path d="M16 17l5-5-5-5"/>
            <path d="M21 12H9"/>
        }.into_any()),
        "panel-left-close" => svg(view! {
            <rect x="3" y="3" width="18" height="18" rx="2"/>
            <path d="M9 3v18"/>
            <path d="m16 15-3-3 3-3"/>
        }.into_any()),
        "panel-left-open" => svg(view! {
            <rect x="3" y="3" width="18" height="18" rx="2"/>
            <path d="M9 3v18"/>
            <path d="m14 9 3 3-3 3"/>
        }.into_any()),
        "plus" => svg(view! {
            <path d="M12 5v14"/>
            <path d="M5 12h14"/>
        }.into_any()),
        "edit" => svg(view! {
            <path d="M11 4H4a2 2 0 0 0-2 2v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2v-7"/>
            <path d="M18.5 2.5a2.12 2.12 0 0 1 3 3L12 15l-4 1 1-4z"/>
        }.into_any()),
        "eye" => svg(view! {
            <path d="M1 12s4-8 11-8 11 8 11 8-4 8-11 8-11-8-11-8z"/>
            <circle cx="12" cy="12" r="3"/>
        }.into_any()),
        "refresh" => svg(view! {
            <path d="M23 4v6h-6"/>
            <path d="M1 20v-6h6"/>
            <path d="M3.51 9a9 9 0 0 1 14.85-3.36L23 10"/>
            <path d="M20.49 15a9 9 0 0 1-14.85 3.36L1 14"/>
        }.into_any()),
        "x" => svg(view! {
            <path d="M18 6 6 18"/>
            <path d="m6 6 12 12"/>
        }.into_any()),
        "search" => svg(view! {
            <circle cx="11" cy="11" r="8"/>
            <path d="m21 21-4.35-4.35"/>
        }.into_any()),
        "chevron-left" => svg(view! { <path d="m15 18-6-6 6-6"/> }.into_any()),
        "chevron-right" => svg(view! { <path d="m9 18 6-6-6-6"/> }.into_any()),
        "chevron-down" => svg(view! { <path d="m6 9 6 6 6-6"/> }.into_any()),
        _ => ().into_any(),
    }
}
