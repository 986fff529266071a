use crate::layout::global_context::LandingContext;
use crate::pages::landing::LandingPage;
use contracts::site::default_site_content;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    match default_site_content() {
        Ok(site) => {
            log::info!("site content loaded for {}", site.brand.name);
            // Provide the landing state to the whole page via context.
            provide_context(LandingContext::new(site));
            view! { <LandingPage /> }.into_any()
        }
        Err(err) => {
            log::error!("failed to load site content: {:#}", err);
            view! {
                <div class="load-error">
                    <h1>"Something went wrong"</h1>
                    <p>"The page content could not be loaded."</p>
                </div>
            }
            .into_any()
        }
    }
}
