//! Notification list items, the header panel and the full notifications page.

use common::model::notification::{avatar_slot, initials, partition_unread, Notification};
use yew::prelude::*;

/// Avatar background/foreground pairs, picked per sender name.
const AVATAR_PALETTE: [(&str, &str); 6] = [
    ("#dbeafe", "#1d4ed8"),
    ("#fee2e2", "#b91c1c"),
    ("#dcfce7", "#15803d"),
    ("#f3e8ff", "#7e22ce"),
    ("#fef9c3", "#a16207"),
    ("#fce7f3", "#be185d"),
];

fn avatar(name: &str) -> Html {
    let (background, color) = AVATAR_PALETTE[avatar_slot(name, AVATAR_PALETTE.len())];
    html! {
        <span class="avatar" style={format!("background: {}; color: {}", background, color)}>
            { initials(name) }
        </span>
    }
}

fn notification_item(notification: &Notification) -> Html {
    html! {
        <div class={classes!("notification", (!notification.is_read).then_some("unread"))} key={notification.id.clone()}>
            { avatar(&notification.sender_name) }
            <div class="notification-body">
                <p class="headline">{ notification.headline() }</p>
                <p class="meta">{ format!("{} | {}", notification.timestamp, notification.sender_id) }</p>
                <p class="message">{ notification.message.clone() }</p>
            </div>
        </div>
    }
}

/// Slide-out panel under the header bell. Lists unread notifications only.
pub fn notifications_panel(
    notifications: &[Notification],
    on_close: &Callback<()>,
    on_view_all: &Callback<()>,
) -> Html {
    let (unread, _) = partition_unread(notifications);
    let close = {
        let on_close = on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let view_all = {
        let on_view_all = on_view_all.clone();
        Callback::from(move |_: MouseEvent| on_view_all.emit(()))
    };

    html! {
        <>
            <div class="panel-backdrop" onclick={close.clone()}></div>
            <aside class="notifications-panel">
                <div class="panel-header">
                    <h2>{ format!("Notifications ({})", unread.len()) }</h2>
                    <button class="icon-btn" title="Close" onclick={close}>
                        <i class="material-icons">{"close"}</i>
                    </button>
                </div>
                <div class="panel-body">
                    if unread.is_empty() {
                        <p class="subtle">{"You're all caught up."}</p>
                    } else {
                        { for unread.into_iter().map(notification_item) }
                    }
                </div>
                <div class="panel-footer">
                    <button class="btn-text" onclick={view_all}>{"VIEW ALL"}</button>
                </div>
            </aside>
        </>
    }
}

pub fn notifications_page(notifications: &[Notification]) -> Html {
    let (unread, read) = partition_unread(notifications);
    let section = |title: &'static str, items: Vec<&Notification>| {
        html! {
            <section class="notification-section">
                <h2>{ title }</h2>
                if items.is_empty() {
                    <p class="subtle">{"Nothing here."}</p>
                } else {
                    { for items.into_iter().map(notification_item) }
                }
            </section>
        }
    };

    html! {
        <div class="page notifications-page">
            <h1 class="page-title">{"Notifications"}</h1>
            { section("Unread", unread) }
            { section("Older", read) }
        </div>
    }
}
