//! Admin password rotation form.

use leptos::prelude::*;

use crate::state::password::PasswordForm;

#[component]
pub fn ChangePasswordPage() -> impl IntoView {
    let form = RwSignal::new(PasswordForm::default());
    let submitting = move || form.with(|f| f.submitting);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(change) = form.try_update(PasswordForm::begin_submit).flatten() else {
            return;
        };
        leptos::task::spawn_local(async move {
            let result = crate::net::api::change_password(&change).await;
            if let Err(err) = &result {
                leptos::logging::warn!("password change failed: {err}");
            }
            form.try_update(|f| f.finish_submit(result));
        });
    };

    let on_cancel = move |_| form.set(PasswordForm::default());

    view! {
        <div class="page page--password">
            <h1 class="page__title">"Change Your Password"</h1>
            <Show when=move || form.with(|f| f.success.is_some())>
                <div class="notice notice--success">{move || form.with(|f| f.success.clone().unwrap_or_default())}</div>
            </Show>
            <form class="password-form" novalidate=true on:submit=on_submit>
                <label class="form__field">
                    <span class="form__label">"Old Password"</span>
                    <input
                        class="form__input"
                        type="password"
                        autocomplete="current-password"
                        disabled=submitting
                        prop:value=move || form.with(|f| f.old_password.clone())
                        on:input=move |ev| form.update(|f| f.old_password = event_target_value(&ev))
                    />
                </label>
                <label class="form__field">
                    <span class="form__label">"New Password"</span>
                    <input
                        class="form__input"
                        type="password"
                        autocomplete="new-password"
                        disabled=submitting
                        prop:value=move || form.with(|f| f.new_password.clone())
                        on:input=move |ev| form.update(|f| f.new_password = event_target_value(&ev))
                    />
                </label>
                <label class="form__field">
                    <span class="form__label">"Confirm New Password"</span>
                    <input
                        class="form__input"
                        type="password"
                        autocomplete="new-password"
                        disabled=submitting
                        prop:value=move || form.with(|f| f.confirm_password.clone())
                        on:input=move |ev| form.update(|f| f.confirm_password = event_target_value(&ev))
                    />
                </label>
                <Show when=move || form.with(|f| f.error.is_some())>
                    <p class="form__error" role="alert">{move || form.with(|f| f.error.clone().unwrap_or_default())}</p>
                </Show>
                <div class="form__actions">
                    <button type="button" class="btn" disabled=submitting on:click=on_cancel>
                        "Cancel"
                    </button>
                    <button type="submit" class="btn btn--primary" disabled=submitting>
                        {move || if submitting() { "Updating..." } else { "Update Password" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
