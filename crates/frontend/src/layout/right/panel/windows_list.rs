//! Список открытых окон в правой панели

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

#[component]
pub fn WindowsList() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="windows-list">
            <div class="windows-list__header">
                <h3>"Открытые окна"</h3>
                <span class="windows-list__count">
                    {move || format!("({})", ctx.opened.get().len())}
                </span>
            </div>

            <div class="windows-list__items">
                <Show
                    when=move || !ctx.opened.get().is_empty()
                    fallback=|| view! { <div class="windows-list__empty">"Нет открытых окон"</div> }
                >
                    <For
                        each=move || ctx.opened.get()
                        key=|tab| tab.key.clone()
                        children=move |tab| {
                            let key_for_active = tab.key.clone();
                            let key_for_switch = tab.key.clone();
                            let key_for_close = tab.key.clone();
                            view! {
                                <div
                                    class="windows-list__item"
                                    class:windows-list__item--active=move || {
                                        ctx.active.get().as_ref() == Some(&key_for_active)
                                    }
                                    on:click=move |_| ctx.activate_tab(&key_for_switch)
                                >
                                    <span class="windows-list__item-title">{tab.title.clone()}</span>
                                    <button
                                        class="windows-list__item-close"
                                        title="Закрыть окно"
                                        on:click=move |ev: ev::MouseEvent| {
                                            ev.stop_propagation();
                                            ctx.close_tab(&key_for_close);
                                        }
                                    >
                                        {icon("x")}
                                    </button>
                                </div>
                            }
                        }
                    />
                </Show>
            </div>
        </div>
    }
}
