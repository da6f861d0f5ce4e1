use crate::config::BUNDLE_NAME;
use maud::DOCTYPE;
use maud::Markup;
use maud::PreEscaped;
use maud::html;

pub fn theme(content: Markup) -> Markup {
    theme_with_head(None, html! {}, content)
}

pub fn theme_with_head(title: Option<&str>, extra_head: Markup, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" class="h-full bg-white dark:bg-gray-900 text-gray-900 dark:text-white" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                link rel="stylesheet" href=(format!("/pkg/{BUNDLE_NAME}.css"));
                @if let Some(title) = title {
                    title { (title) " - Worklog" }
                }
                (extra_head)
            }
            body class="h-full" {
                (content)
            }
        }
    }
}

/// The page every client route is served with; the wasm bundle renders the rest.
pub fn app_shell() -> Markup {
    let loader = format!(
        "import init, {{ mount }} from '/pkg/{BUNDLE_NAME}.js'; await init('/pkg/{BUNDLE_NAME}.wasm'); mount();"
    );

    theme_with_head(
        Some("Profile"),
        html! {
            link rel="modulepreload" href=(format!("/pkg/{BUNDLE_NAME}.js"));
            script type="module" { (PreEscaped(loader)) }
        },
        html! {
            noscript { "Worklog needs JavaScript to run." }
        },
    )
}
