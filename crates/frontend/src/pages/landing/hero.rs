use super::IconList;
use crate::layout::global_context::use_landing;
use crate::layout::Section;
use crate::shared::components::ui::{Badge, Button};
use crate::shared::icons::icon;
use contracts::site::{PhoneMock, SectionId, Stat};
use leptos::ev::MouseEvent;
use leptos::prelude::*;

#[component]
fn StatBlock(stat: Stat) -> impl IntoView {
    view! {
        <div class="stat">
            <div class="stat__value">{stat.value}</div>
            <div class="stat__label muted">{stat.label}</div>
        </div>
    }
}

/// Static phone screen illustrating the app.
#[component]
fn PhonePreview(phone: PhoneMock) -> impl IntoView {
    view! {
        <div class="phone">
            <div class="phone__notch"></div>
            <div class="phone__screen">
                <div class="phone__title-row">
                    <div class="phone__title">{phone.title}</div>
                    <Badge variant="secondary">{icon("cpu")}{phone.badge}</Badge>
                </div>
                <div class="phone__prompt muted">{phone.prompt}</div>
                <div class="phone__columns">
                    {phone
                        .columns
                        .into_iter()
                        .map(|column| view! {
                            <div class="phone__column">
                                <div class="phone__column-title">{column.title}</div>
                                <IconList items=column.items />
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn Hero() -> impl IntoView {
    let ctx = use_landing();
    let hero = ctx.with_site(|site| site.hero.clone());

    let join = move |_: MouseEvent| ctx.scroll_to(SectionId::Cta);
    let explore = move |_: MouseEvent| ctx.scroll_to(SectionId::Features);

    view! {
        <Section id=SectionId::Hero class="section--hero">
            <div class="hero">
                <div class="hero__copy fade-in">
                    <Badge>{icon("sparkles")}{hero.badge}</Badge>
                    <h1 class="hero__headline">
                        {hero.headline}
                        <span class="accent">{hero.highlight}</span>
                        "."
                    </h1>
                    <p class="hero__body muted">{hero.body}</p>
                    <div class="hero__actions">
                        <Button size="lg" on_click=Callback::new(join)>{hero.primary_cta}</Button>
                        <Button size="lg" variant="outline" on_click=Callback::new(explore)>
                            {hero.secondary_cta}
                        </Button>
                    </div>
                    <div class="hero__stats">
                        {hero
                            .stats
                            .into_iter()
                            .map(|stat| view! { <StatBlock stat=stat /> })
                            .collect_view()}
                    </div>
                </div>
                <div class="hero__visual fade-in fade-in--delayed">
                    <PhonePreview phone=hero.phone />
                </div>
            </div>
        </Section>
    }
}

#[component]
pub fn SocialProof() -> impl IntoView {
    let ctx = use_landing();
    let social = ctx.with_site(|site| site.social.clone());

    view! {
        <Section id=SectionId::Social class="section--compact">
            <div class="social muted">
                <span>{social.lead}</span>
                {social
                    .partners
                    .into_iter()
                    .map(|partner| view! { <Badge variant="outline">{partner}</Badge> })
                    .collect_view()}
            </div>
        </Section>
    }
}
