use super::state::{SaveStep, Section, SettingsForm};
use crate::shared::components::ui::TextField;
use crate::shared::notice::{run_after, NoticeBanner};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::system::settings::api;
use contracts::domain::common::ActionError;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

const NOTICE_TTL_MS: u32 = 3000;

async fn run_step(step: &SaveStep) -> Result<(), ActionError> {
    match step {
        SaveStep::Email(req) => api::update_email(req).await,
        SaveStep::Store(req) => api::update_store(req).await,
        SaveStep::Bank(req) => api::update_bank(req).await,
    }
}

/// Run the plan in order, stopping at the first failed step
fn save(form: RwSignal<SettingsForm>) {
    let plan = match form.try_update(|f| f.begin_save()) {
        Some(Ok(plan)) if !plan.is_empty() => plan,
        Some(Ok(_)) => return,
        Some(Err(e)) => {
            log::debug!("settings not saved: {}", e);
            return;
        }
        None => return,
    };

    spawn_local(async move {
        for step in &plan {
            if let Err(e) = run_step(step).await {
                log::warn!("settings step {:?} failed: {}", step.section(), e);
                form.try_update(|f| f.failed(&e));
                return;
            }
            form.try_update(|f| f.step_succeeded(step));
        }
        log::info!("settings saved ({} steps)", plan.len());
        form.try_update(|f| f.finished());
        run_after(NOTICE_TTL_MS, move || {
            form.try_update(|f| f.expire_notice());
        });
    });
}

fn field(form: RwSignal<SettingsForm>, get: fn(&SettingsForm) -> String) -> Signal<String> {
    Signal::derive(move || form.with(get))
}

fn setter(form: RwSignal<SettingsForm>, set: fn(&mut SettingsForm, String)) -> Callback<String> {
    Callback::new(move |v| form.update(|f| set(f, v)))
}

#[component]
fn SectionHeader(title: &'static str, form: RwSignal<SettingsForm>, section: Section) -> impl IntoView {
    let editing = move || form.with(|f| f.is_editing(section));
    view! {
        <div class="settings-section__header">
            <h3 class="details-section__title">{title}</h3>
            <Button
                appearance=ButtonAppearance::Subtle
                disabled=Signal::derive(move || form.with(|f| f.saving))
                on_click=move |_| form.update(|f| f.toggle_edit(section))
            >
                {move || if editing() { "Cancel" } else { "Edit" }}
            </Button>
        </div>
    }
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let form = RwSignal::new(SettingsForm::loading());

    Effect::new(move |_| {
        spawn_local(async move {
            let (settings, admin) = futures::join!(api::fetch_settings(), api::fetch_admin());
            let first_error = settings.as_ref().err().or(admin.as_ref().err()).cloned();
            form.update(|f| {
                f.loaded(settings.ok(), admin.ok().flatten());
                if let Some(e) = &first_error {
                    log::error!("Failed to load settings: {}", e);
                    f.load_failed(e);
                }
            });
        });
    });

    let editing = move |section: Section| Signal::derive(move || form.with(|f| f.is_editing(section)));
    let read_only = Signal::derive(|| false);
    let can_save = Signal::derive(move || form.with(|f| f.has_edits() && !f.saving));

    view! {
        <PageFrame page_id="sys_settings--system" category=PAGE_CAT_SYSTEM>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Settings"</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || !can_save.get())
                        on_click=move |_| save(form)
                    >
                        {move || form.with(|f| f.save_label())}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <NoticeBanner
                    notice=Signal::derive(move || form.with(|f| f.notice.clone()))
                    on_dismiss=Callback::new(move |_| form.update(|f| f.dismiss_notice()))
                />

                <Show when=move || form.with(|f| f.loading)>
                    <Flex gap=FlexGap::Small>
                        <Spinner />
                        <span>"Loading settings..."</span>
                    </Flex>
                </Show>

                <div class="settings-grid">
                    <Card>
                        <SectionHeader title="Admin Account" form=form section=Section::Email />
                        <TextField
                            label="Name"
                            value=field(form, |f| f.admin.name.clone())
                            on_input=setter(form, |f, v| f.admin.name = v)
                            editable=read_only
                        />
                        <TextField
                            label="Email"
                            input_type="email"
                            value=field(form, |f| f.admin.email.clone())
                            on_input=setter(form, |f, v| f.admin.email = v)
                            editable=editing(Section::Email)
                        />
                        <TextField
                            label="Phone"
                            value=field(form, |f| f.admin.phone_number.clone())
                            on_input=setter(form, |f, v| f.admin.phone_number = v)
                            editable=read_only
                        />
                        <Show when=move || form.with(|f| f.editing_email)>
                            <TextField
                                label="Current Password"
                                input_type="password"
                                placeholder="Required to change the email"
                                value=field(form, |f| f.current_password.clone())
                                on_input=setter(form, |f, v| f.current_password = v)
                                editable=Signal::derive(|| true)
                            />
                        </Show>
                    </Card>

                    <Card>
                        <SectionHeader title="Store Information" form=form section=Section::Store />
                        <TextField
                            label="Store Name"
                            value=field(form, |f| f.store.name.clone())
                            on_input=setter(form, |f, v| f.store.name = v)
                            editable=editing(Section::Store)
                        />
                        <TextField
                            label="Store Email"
                            input_type="email"
                            value=field(form, |f| f.store.email.clone())
                            on_input=setter(form, |f, v| f.store.email = v)
                            editable=editing(Section::Store)
                        />
                        <TextField
                            label="Store Phone"
                            input_type="tel"
                            value=field(form, |f| f.store.phone.clone())
                            on_input=setter(form, |f, v| f.store.phone = v)
                            editable=editing(Section::Store)
                        />
                        <TextField
                            label="Store Address"
                            value=field(form, |f| f.store.address.clone())
                            on_input=setter(form, |f, v| f.store.address = v)
                            editable=editing(Section::Store)
                        />
                        <TextField
                            label="Description"
                            multiline=true
                            value=field(form, |f| f.store.description.clone())
                            on_input=setter(form, |f, v| f.store.description = v)
                            editable=editing(Section::Store)
                        />
                    </Card>

                    <Card>
                        <SectionHeader title="Bank Details" form=form section=Section::Bank />
                        <TextField
                            label="Bank Name"
                            value=field(form, |f| f.bank.bank_name.clone())
                            on_input=setter(form, |f, v| f.bank.bank_name = v)
                            editable=editing(Section::Bank)
                        />
                        <TextField
                            label="Account Name"
                            value=field(form, |f| f.bank.account_name.clone())
                            on_input=setter(form, |f, v| f.bank.account_name = v)
                            editable=editing(Section::Bank)
                        />
                        <TextField
                            label="Account Number"
                            value=field(form, |f| f.bank.account_number.clone())
                            on_input=setter(form, |f, v| f.bank.account_number = v)
                            editable=editing(Section::Bank)
                        />
                        <TextField
                            label="Sort Code"
                            value=field(form, |f| f.bank.sort_code.clone())
                            on_input=setter(form, |f, v| f.bank.sort_code = v)
                            editable=editing(Section::Bank)
                        />
                    </Card>
                </div>
            </div>
        </PageFrame>
    }
}
