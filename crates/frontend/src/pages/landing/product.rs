use super::{CheckList, LabeledGrid};
use crate::layout::global_context::use_landing;
use crate::layout::{Section, SectionIntro};
use crate::shared::components::ui::{Badge, Card, CardContent, CardHeader, CardTitle};
use crate::shared::icons::icon;
use contracts::site::{Feature, SectionId};
use leptos::prelude::*;

/// Delay between sibling cards appearing.
const STAGGER_MS: u32 = 80;

#[component]
fn FeatureCard(feature: Feature, delay_ms: u32) -> impl IntoView {
    view! {
        <Card delay_ms=delay_ms>
            <CardHeader>
                <div class="feature__icon">{icon(&feature.icon)}</div>
                <CardTitle>{feature.title}</CardTitle>
            </CardHeader>
            <CardContent class="muted">{feature.body}</CardContent>
        </Card>
    }
}

#[component]
pub fn Features() -> impl IntoView {
    let features = use_landing().with_site(|site| site.features.clone());

    view! {
        <Section id=SectionId::Features>
            <SectionIntro title=features.title subtitle=features.subtitle />
            <div class="grid grid--3">
                {features
                    .items
                    .into_iter()
                    .enumerate()
                    .map(|(idx, feature)| view! {
                        <FeatureCard feature=feature delay_ms={idx as u32 * STAGGER_MS} />
                    })
                    .collect_view()}
            </div>
        </Section>
    }
}

#[component]
pub fn HowItWorks() -> impl IntoView {
    let phases = use_landing().with_site(|site| site.phases.clone());

    view! {
        <Section id=SectionId::How>
            <div class="grid grid--3">
                {phases
                    .into_iter()
                    .enumerate()
                    .map(|(idx, phase)| view! {
                        <Card delay_ms={idx as u32 * STAGGER_MS}>
                            <CardHeader>
                                <CardTitle>{phase.title}</CardTitle>
                            </CardHeader>
                            <CardContent class="muted">
                                <p>{phase.summary}</p>
                                <CheckList items=phase.items />
                            </CardContent>
                        </Card>
                    })
                    .collect_view()}
            </div>
        </Section>
    }
}

/// The two headline products side by side.
#[component]
pub fn Marquee() -> impl IntoView {
    let items = use_landing().with_site(|site| site.marquee.clone());

    view! {
        <Section id=SectionId::Copilot>
            <div class="grid grid--2">
                {items
                    .into_iter()
                    .map(|item| view! {
                        <div class="marquee">
                            <Badge variant=item.badge_variant.clone().unwrap_or_default()>
                                {icon(&item.badge_icon)}
                                {item.badge}
                            </Badge>
                            <h3 class="marquee__title">{item.title}</h3>
                            <p class="muted">{item.body}</p>
                            <CheckList items=item.bullets class="check-list--two-col" />
                        </div>
                    })
                    .collect_view()}
            </div>
        </Section>
    }
}

#[component]
pub fn Integrations() -> impl IntoView {
    let integrations = use_landing().with_site(|site| site.integrations.clone());

    view! {
        <Section id=SectionId::Integrations>
            <div class="grid grid--2">
                <Card>
                    <CardHeader>
                        <CardTitle>{integrations.title}</CardTitle>
                    </CardHeader>
                    <CardContent>
                        <CheckList items=integrations.items class="check-list--two-col" />
                    </CardContent>
                </Card>
                <Card delay_ms=STAGGER_MS>
                    <CardHeader>
                        <CardTitle>{integrations.stack_title}</CardTitle>
                    </CardHeader>
                    <CardContent>
                        <LabeledGrid entries=integrations.stack />
                    </CardContent>
                </Card>
            </div>
        </Section>
    }
}
