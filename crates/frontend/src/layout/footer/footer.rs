use crate::layout::global_context::use_landing;
use crate::layout::header::header::Brand;
use crate::layout::Section;
use crate::shared::scroll::current_year;
use contracts::site::{FooterColumn, SectionId};
use leptos::prelude::*;

pub fn copyright_line(year: u32, brand: &str, rights: &str) -> String {
    format!("© {} {}. {}", year, brand, rights)
}

#[component]
fn FooterLinks(column: FooterColumn) -> impl IntoView {
    view! {
        <div class="footer__column">
            <div class="footer__heading">{column.title}</div>
            <ul class="footer__links">
                {column
                    .links
                    .into_iter()
                    .map(|link| match link.section {
                        Some(section) => view! { <li><a href=section.anchor()>{link.label}</a></li> }.into_any(),
                        None => view! { <li>{link.label}</li> }.into_any(),
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let ctx = use_landing();
    let (tagline, columns, copyright) = ctx.with_site(|site| {
        (
            site.brand.tagline.clone(),
            site.footer.columns.clone(),
            copyright_line(current_year(), &site.brand.name, &site.footer.rights),
        )
    });

    view! {
        <footer class="footer">
            <Section id=SectionId::Footer class="section--compact">
                <div class="footer__grid">
                    <div class="footer__column">
                        <Brand />
                        <p class="muted">{tagline}</p>
                    </div>
                    {columns
                        .into_iter()
                        .map(|column| view! { <FooterLinks column=column /> })
                        .collect_view()}
                </div>
                <div class="footer__copyright muted">{copyright}</div>
            </Section>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copyright_line() {
        assert_eq!(
            copyright_line(2026, "TravelPorter", "All rights reserved."),
            "© 2026 TravelPorter. All rights reserved."
        );
    }
}
