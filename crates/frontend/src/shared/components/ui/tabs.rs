//! Tabbed disclosure: `Tabs` owns a [`TabGroup`], triggers and panels read it.
//!
//! ```text
//! <Tabs default_value="one">
//!     <TabsList>
//!         <TabsTrigger value="one">"First"</TabsTrigger>
//!         <TabsTrigger value="two">"Second"</TabsTrigger>
//!     </TabsList>
//!     <TabsContent value="one">"..."</TabsContent>
//!     <TabsContent value="two">"..."</TabsContent>
//! </Tabs>
//! ```

use contracts::tabs::TabGroup;
use leptos::prelude::*;

pub fn trigger_id(group_id: &str, key: &str) -> String {
    format!("{}-trigger-{}", group_id, key)
}

pub fn panel_id(group_id: &str, key: &str) -> String {
    format!("{}-panel-{}", group_id, key)
}

/// Handle shared with the triggers and panels of one tab group.
#[derive(Clone, Copy)]
struct TabsContext {
    group: RwSignal<TabGroup>,
    group_id: StoredValue<String>,
    on_change: Option<Callback<String>>,
}

impl TabsContext {
    fn new(default_value: Option<String>, group_id: String) -> Self {
        Self {
            group: RwSignal::new(TabGroup::new(default_value)),
            group_id: StoredValue::new(group_id),
            on_change: None,
        }
    }

    fn register(&self, key: &str) {
        self.group.update(|group| group.register(key.to_string()));
    }

    /// Activates `key`. Unknown keys are logged and ignored, repeated
    /// selects do not notify subscribers.
    fn select(&self, key: &str) {
        let key = key.to_string();
        let (known, active) = self
            .group
            .with_untracked(|group| (group.contains(&key), group.is_active(&key)));
        if !known {
            log::warn!(
                "tabs '{}': ignoring select of undeclared key '{}'",
                self.group_id.get_value(),
                key
            );
            return;
        }
        if active {
            return;
        }

        self.group.update(|group| {
            if let Err(err) = group.select(&key) {
                log::warn!("{}", err);
            }
        });
        log::debug!("tabs '{}': active = '{}'", self.group_id.get_value(), key);
        if let Some(handler) = self.on_change {
            handler.run(key);
        }
    }

    /// Tracked; re-runs the caller when the active key changes.
    fn is_active(&self, key: &str) -> bool {
        self.group.with(|group| group.is_active(&key.to_string()))
    }

    fn trigger_id(&self, key: &str) -> String {
        trigger_id(&self.group_id.get_value(), key)
    }

    fn panel_id(&self, key: &str) -> String {
        panel_id(&self.group_id.get_value(), key)
    }
}

fn use_tabs() -> TabsContext {
    use_context::<TabsContext>().expect("TabsTrigger/TabsContent used outside of <Tabs>")
}

#[component]
pub fn Tabs(
    /// Key shown first; defaults to the first registered key
    #[prop(optional, into)]
    default_value: MaybeProp<String>,
    /// Prefix for trigger and panel element ids
    #[prop(optional, into)]
    id: Option<String>,
    /// Called with the new key after each change
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let mut ctx = TabsContext::new(
        default_value.get_untracked(),
        id.unwrap_or_else(|| "tabs".to_string()),
    );
    ctx.on_change = on_change;
    provide_context(ctx);

    view! {
        <div class=move || format!("tabs {}", class.get().unwrap_or_default())>
            {children()}
        </div>
    }
}

/// Container for triggers, kept in declaration order.
#[component]
pub fn TabsList(
    #[prop(optional, into)] class: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div role="tablist" class=move || format!("tabs__list {}", class.get().unwrap_or_default())>
            {children()}
        </div>
    }
}

#[component]
pub fn TabsTrigger(
    /// Key of the panel this trigger activates
    #[prop(into)]
    value: String,
    children: Children,
) -> impl IntoView {
    let ctx = use_tabs();
    ctx.register(&value);

    let trigger_dom_id = ctx.trigger_id(&value);
    let panel_dom_id = ctx.panel_id(&value);
    let key_for_active = value.clone();
    let is_active = Memo::new(move |_| ctx.is_active(&key_for_active));

    view! {
        <button
            type="button"
            role="tab"
            id=trigger_dom_id
            aria-controls=panel_dom_id
            aria-selected=move || is_active.get().to_string()
            tabindex=move || if is_active.get() { "0" } else { "-1" }
            class=move || {
                if is_active.get() {
                    "tabs__trigger tabs__trigger--active"
                } else {
                    "tabs__trigger"
                }
            }
            on:click=move |_| ctx.select(&value)
        >
            {children()}
        </button>
    }
}

/// Panel body; rendered only while its key is the active one.
#[component]
pub fn TabsContent(
    #[prop(into)] value: String,
    #[prop(optional, into)] class: MaybeProp<String>,
    children: ChildrenFn,
) -> impl IntoView {
    let ctx = use_tabs();
    ctx.register(&value);

    let trigger_dom_id = ctx.trigger_id(&value);
    let panel_dom_id = ctx.panel_id(&value);
    let is_active = Memo::new(move |_| ctx.is_active(&value));

    move || {
        is_active.get().then(|| {
            view! {
                <div
                    role="tabpanel"
                    id=panel_dom_id.clone()
                    aria-labelledby=trigger_dom_id.clone()
                    class=format!("tabs__content {}", class.get().unwrap_or_default())
                >
                    {children()}
                </div>
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;
    use std::sync::{Arc, Mutex};

    fn recording_context(
        default_value: Option<&str>,
    ) -> (TabsContext, Arc<Mutex<Vec<String>>>) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let sink = calls.clone();
        let mut ctx = TabsContext::new(default_value.map(str::to_string), "faq".to_string());
        ctx.on_change = Some(Callback::new(move |key: String| {
            sink.lock().unwrap().push(key);
        }));
        (ctx, calls)
    }

    #[test]
    fn test_dom_ids_pair_trigger_and_panel() {
        assert_eq!(trigger_id("faq", "three"), "faq-trigger-three");
        assert_eq!(panel_id("faq", "three"), "faq-panel-three");
        assert_ne!(trigger_id("faq", "one"), panel_id("faq", "one"));
    }

    #[test]
    fn test_select_notifies_once_per_change() {
        Owner::new().with(|| {
            let (ctx, calls) = recording_context(Some("one"));
            for key in ["one", "two", "three", "four"] {
                ctx.register(key);
            }
            assert!(ctx.is_active("one"));

            ctx.select("three");
            ctx.select("three");
            ctx.select("nonexistent");

            assert!(ctx.is_active("three"));
            assert!(!ctx.is_active("one"));
            assert!(!ctx.is_active("nonexistent"));
            assert_eq!(*calls.lock().unwrap(), vec!["three".to_string()]);
        });
    }

    #[test]
    fn test_empty_group_has_no_active_panel() {
        Owner::new().with(|| {
            let (ctx, calls) = recording_context(None);
            assert!(!ctx.is_active("x"));

            ctx.select("x");

            assert!(!ctx.is_active("x"));
            assert!(calls.lock().unwrap().is_empty());
        });
    }

    #[test]
    fn test_context_ids_use_group_prefix() {
        Owner::new().with(|| {
            let (ctx, _) = recording_context(None);
            assert_eq!(ctx.trigger_id("two"), "faq-trigger-two");
            assert_eq!(ctx.panel_id("two"), "faq-panel-two");
        });
    }
}
