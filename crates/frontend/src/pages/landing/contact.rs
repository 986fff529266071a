use super::LabeledGrid;
use crate::layout::global_context::use_landing;
use crate::layout::Section;
use crate::shared::components::ui::{Button, Card, CardContent, CardHeader, CardTitle, Input, Textarea};
use crate::shared::scroll::set_location_hash;
use contracts::site::SectionId;
use leptos::ev::{MouseEvent, SubmitEvent};
use leptos::prelude::*;

// Forms are not wired to any service yet; keep the browser from reloading
// the page and leave a trace in the console.
fn swallow_submit(form: &'static str) -> impl Fn(SubmitEvent) + 'static {
    move |ev: SubmitEvent| {
        ev.prevent_default();
        log::debug!("{} form submitted; no handler attached", form);
    }
}

#[component]
pub fn EarlyAccess() -> impl IntoView {
    let cta = use_landing().with_site(|site| site.cta.clone());
    let contact_us = move |_: MouseEvent| set_location_hash(SectionId::Contact);

    view! {
        <Section id=SectionId::Cta>
            <div class="grid grid--2 grid--center">
                <div>
                    <h3 class="section__subtitle">{cta.title}</h3>
                    <p class="muted">{cta.body}</p>
                    <form class="form form--inline" on:submit=swallow_submit("invite")>
                        <Input
                            input_type="email"
                            name="email"
                            placeholder=cta.email_placeholder
                            autocomplete="email"
                            required=true
                        />
                        <Button button_type="submit">{cta.submit_label}</Button>
                    </form>
                    <p class="fine-print muted">{cta.disclaimer}</p>
                </div>
                <Card>
                    <CardHeader>
                        <CardTitle>{cta.partners_title}</CardTitle>
                    </CardHeader>
                    <CardContent class="muted stack">
                        <p>{cta.partners_body}</p>
                        <div class="button-row">
                            <Button variant="outline" on_click=Callback::new(contact_us)>
                                {cta.contact_label}
                            </Button>
                            <Button>{cta.deck_label}</Button>
                        </div>
                    </CardContent>
                </Card>
            </div>
        </Section>
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let contact = use_landing().with_site(|site| site.contact.clone());

    view! {
        <Section id=SectionId::Contact>
            <div class="grid grid--2">
                <div>
                    <h3 class="section__subtitle">{contact.title}</h3>
                    <p class="muted">{contact.body}</p>
                    <form class="form" on:submit=swallow_submit("contact")>
                        <div class="form__row">
                            <Input name="name" placeholder="Name" autocomplete="name" required=true />
                            <Input name="company" placeholder="Company" autocomplete="organization" />
                        </div>
                        <Input input_type="email" name="email" placeholder="Email" autocomplete="email" required=true />
                        <Textarea name="message" placeholder="Your message" rows=5 />
                        <Button button_type="submit">{contact.submit_label}</Button>
                    </form>
                </div>
                <Card>
                    <CardHeader>
                        <CardTitle>{contact.model_title}</CardTitle>
                    </CardHeader>
                    <CardContent>
                        <LabeledGrid entries=contact.model />
                    </CardContent>
                </Card>
            </div>
        </Section>
    }
}
