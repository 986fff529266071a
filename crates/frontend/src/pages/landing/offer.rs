use super::{CheckList, IconList};
use crate::layout::global_context::use_landing;
use crate::layout::{Section, SectionIntro};
use crate::shared::components::ui::{Badge, Button, Card, CardContent, CardHeader, CardTitle};
use contracts::site::{SectionId, Tier};
use leptos::ev::MouseEvent;
use leptos::prelude::*;

pub fn tier_class(popular: bool) -> &'static str {
    if popular {
        "tier tier--popular"
    } else {
        "tier"
    }
}

#[component]
fn TierCard(tier: Tier, delay_ms: u32) -> impl IntoView {
    let ctx = use_landing();
    let period = tier.period_suffix();
    let join = move |_: MouseEvent| ctx.scroll_to(SectionId::Cta);

    view! {
        <Card delay_ms=delay_ms class=tier_class(tier.popular)>
            <CardHeader>
                <div class="tier__heading">
                    <CardTitle>{tier.name}</CardTitle>
                    {tier.popular.then(|| view! { <Badge>"Popular"</Badge> })}
                </div>
                <div class="tier__price">
                    <span class="tier__amount">{tier.price}</span>
                    <span class="tier__period muted">{period}</span>
                </div>
            </CardHeader>
            <CardContent>
                <CheckList items=tier.highlights />
                <Button class="button--block" on_click=Callback::new(join)>{tier.cta}</Button>
            </CardContent>
        </Card>
    }
}

#[component]
pub fn Pricing() -> impl IntoView {
    let pricing = use_landing().with_site(|site| site.pricing.clone());

    view! {
        <Section id=SectionId::Pricing>
            <SectionIntro title=pricing.title subtitle=pricing.subtitle />
            <div class="grid grid--3">
                {pricing
                    .tiers
                    .into_iter()
                    .enumerate()
                    .map(|(idx, tier)| view! { <TierCard tier=tier delay_ms={idx as u32 * 80} /> })
                    .collect_view()}
            </div>
        </Section>
    }
}

#[component]
pub fn SecurityOverview() -> impl IntoView {
    let security = use_landing().with_site(|site| site.security.clone());

    view! {
        <Section id=SectionId::Security>
            <div class="grid grid--2">
                <div class="stack">
                    <h3 class="section__subtitle">{security.title}</h3>
                    <p class="muted">{security.body}</p>
                    <IconList items=security.points />
                </div>
                <Card>
                    <CardHeader>
                        <CardTitle>{security.notes_title}</CardTitle>
                    </CardHeader>
                    <CardContent class="muted stack">
                        {security
                            .notes
                            .into_iter()
                            .map(|note| view! { <p>{note}</p> })
                            .collect_view()}
                    </CardContent>
                </Card>
            </div>
        </Section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_class_marks_popular() {
        assert_eq!(tier_class(true), "tier tier--popular");
        assert_eq!(tier_class(false), "tier");
    }
}
