//! Implements InputPort. Inquire-based interactive prompts.
//!
//! Main menu -> form / regenerate / overview. Operations run one at a time,
//! so triggers are never offered while a request is in flight.

use crate::adapters::ui::render;
use crate::domain::{DomainError, Field};
use crate::ports::{InputPort, SubmitPort};
use crate::usecases::{FormController, SessionController, SessionState, SubmitOutcome};
use async_trait::async_trait;
use crossterm::style::Stylize;
use indicatif::{ProgressBar, ProgressStyle};
use inquire::ui::{Color, RenderConfig, Styled};
use inquire::{InquireError, Select, Text};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuItem {
    GetInsights,
    Regenerate,
    ShowOverview,
    Quit,
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MenuItem::GetInsights => "Get Business Insights",
            MenuItem::Regenerate => "Regenerate SEO Headline",
            MenuItem::ShowOverview => "Show Business Overview",
            MenuItem::Quit => "Quit",
        })
    }
}

/// Menu entries available for the given state.
fn menu_items(state: &SessionState) -> Vec<MenuItem> {
    let mut items = Vec::with_capacity(4);
    if state.is_loading {
        items.push(MenuItem::Quit);
        return items;
    }
    items.push(MenuItem::GetInsights);
    if state.result.is_some() {
        items.push(MenuItem::Regenerate);
        items.push(MenuItem::ShowOverview);
    }
    items.push(MenuItem::Quit);
    items
}

fn placeholder(field: Field) -> &'static str {
    match field {
        Field::Name => "e.g., Cake & Co, Mumbai Cafe, etc.",
        Field::Location => "e.g., Mumbai, Delhi, Bangalore, etc.",
    }
}

/// Esc / Ctrl-C end the flow quietly; anything else is a prompt failure.
fn is_cancel(e: &InquireError) -> bool {
    matches!(
        e,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}

fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Global prompt styling. Call once before the first prompt.
pub fn apply_theme() {
    let config = RenderConfig::default()
        .with_prompt_prefix(Styled::new("?").with_fg(Color::LightCyan))
        .with_highlighted_option_prefix(Styled::new(">").with_fg(Color::LightBlue));
    inquire::set_global_render_config(config);
}

/// Prompt every field, pre-filled with the current draft. Returns false if cancelled.
fn fill_form(form: &mut FormController) -> Result<bool, DomainError> {
    for field in Field::ALL {
        let label = format!("{}:", field.label());
        let initial = form.draft().get(field).to_string();
        let error = form.errors().get(field).map(str::to_string);

        let mut prompt = Text::new(&label)
            .with_initial_value(&initial)
            .with_placeholder(placeholder(field));
        if let Some(ref message) = error {
            prompt = prompt.with_help_message(message);
        }

        match prompt.prompt() {
            Ok(value) => form.update_field(field, value),
            Err(e) if is_cancel(&e) => return Ok(false),
            Err(e) => return Err(DomainError::Prompt(e.to_string())),
        }
    }
    Ok(true)
}

/// TUI adapter. Inquire prompts.
pub struct TuiInputPort {
    session: Arc<SessionController>,
    form: Mutex<FormController>,
}

impl TuiInputPort {
    pub fn new(session: Arc<SessionController>) -> Self {
        let form = FormController::new(Arc::clone(&session) as Arc<dyn SubmitPort>);
        Self {
            session,
            form: Mutex::new(form),
        }
    }

    async fn get_insights(&self) -> Result<(), DomainError> {
        let mut form = self.form.lock().await;
        if !fill_form(&mut form)? {
            return Ok(());
        }

        let pb = spinner("Getting Business Insights...");
        let outcome = form.submit().await;
        pb.finish_and_clear();

        match outcome {
            SubmitOutcome::Rejected => {
                for (_, message) in form.errors().iter() {
                    println!("{}", format!("  ! {}", message).red());
                }
            }
            SubmitOutcome::Forwarded(_) => self.show_state().await,
        }
        Ok(())
    }

    async fn regenerate(&self) {
        if self.session.is_loading().await {
            return;
        }
        let pb = spinner("Generating New Headline...");
        self.session.regenerate_headline().await;
        pb.finish_and_clear();
        self.show_state().await;
    }

    async fn show_state(&self) {
        let state = self.session.snapshot().await;
        if !state.error_message.is_empty() {
            println!("{}", format!("! {}", state.error_message).red().bold());
        }
        match state.result {
            Some(ref result) => println!("\n{}", render::render_card(result)),
            None if !state.is_loading => println!("\n{}", render::render_empty_state()),
            None => {}
        }
    }
}

#[async_trait]
impl InputPort for TuiInputPort {
    async fn run(&self) -> Result<(), DomainError> {
        self.show_state().await;
        loop {
            let state = self.session.snapshot().await;
            let menu = Select::new("What would you like to do?", menu_items(&state));
            let choice = match menu.prompt() {
                Ok(choice) => choice,
                Err(e) if is_cancel(&e) => break,
                Err(e) => return Err(DomainError::Prompt(e.to_string())),
            };

            match choice {
                MenuItem::GetInsights => self.get_insights().await?,
                MenuItem::Regenerate => self.regenerate().await,
                MenuItem::ShowOverview => self.show_state().await,
                MenuItem::Quit => break,
            }
        }
        Ok(())
    }
}
