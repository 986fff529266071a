use crate::layout::global_context::use_landing;
use crate::layout::{Section, SectionIntro};
use crate::shared::components::ui::{Tabs, TabsContent, TabsList, TabsTrigger};
use contracts::site::SectionId;
use leptos::prelude::*;

/// Questions as a tab group: one trigger per question, one answer visible.
#[component]
pub fn Faq() -> impl IntoView {
    let faq = use_landing().with_site(|site| site.faq.clone());
    let answers = faq.entries.clone();
    let on_change = Callback::new(|key: String| log::info!("faq: showing '{}'", key));

    view! {
        <Section id=SectionId::Faq>
            <SectionIntro title=faq.title subtitle=faq.subtitle />
            <Tabs id="faq" default_value=faq.default_key on_change=on_change class="faq">
                <TabsList class="faq__questions">
                    {faq
                        .entries
                        .into_iter()
                        .map(|entry| view! {
                            <TabsTrigger value=entry.key>{entry.question}</TabsTrigger>
                        })
                        .collect_view()}
                </TabsList>
                {answers
                    .into_iter()
                    .map(|entry| {
                        let answer = entry.answer;
                        view! {
                            <TabsContent value=entry.key class="faq__answer muted">
                                {answer.clone()}
                            </TabsContent>
                        }
                    })
                    .collect_view()}
            </Tabs>
        </Section>
    }
}
