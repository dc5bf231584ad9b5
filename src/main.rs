//! Terminal front-end for the signup form.
//!
//! Each field is edited from a menu. Password criteria are shown after
//! every password entry, and the submit entry stays refused until the
//! gate opens.

use std::{collections::BTreeMap, fmt, path::Path};

use anyhow::Result;
use dotenv::dotenv;
use inquire::{error::InquireResult, Password, PasswordDisplayMode, Select, Text};
use log::{error, info};
use serde_json::json;
use signup_check::{
    CriterionResult, FieldId, FormSnapshot, Presenter, RegistrationPayload, SignupForm,
    ValidationConfig,
};
use strum::IntoEnumIterator;

const CONFIG_FILE: &str = "signup.yaml";

type MenuExit = Option<()>;
const MENU_EXIT: MenuExit = None;
const MENU_LOOP: MenuExit = Some(());

/// A text menu. `enter` returns None when the menu wants to quit,
/// Some(()) to be shown again.
trait Menu {
    fn enter(&mut self) -> Result<MenuExit>;

    /// Runs the menu until it quits, reporting errors along the way
    fn enter_loop(&mut self) {
        while let Some(result) = self.enter().transpose() {
            if let Err(error) = result {
                eprintln!("Error: {error}");
            }
        }
    }
}

struct TerminalPresenter {
    config: ValidationConfig,
    values: FormSnapshot,
    errors: BTreeMap<FieldId, String>,
    criteria_visible: bool,
    submit_enabled: bool,
}

impl TerminalPresenter {
    fn new(config: ValidationConfig) -> Self {
        Self {
            config,
            values: FormSnapshot::new(),
            errors: BTreeMap::new(),
            criteria_visible: false,
            submit_enabled: false,
        }
    }

    fn menu_line(&self, field: FieldId) -> String {
        let value = self.values.get(field);
        let shown = if value.is_empty() {
            "<empty>".to_string()
        } else if field.is_secret() {
            "*".repeat(value.chars().count())
        } else {
            value.to_owned()
        };

        match self.errors.get(&field) {
            Some(error) => format!("{}: {shown}  (!) {error}", field.label()),
            None => format!("{}: {shown}", field.label()),
        }
    }
}

impl Presenter for TerminalPresenter {
    fn form_snapshot(&self) -> FormSnapshot {
        self.values.clone()
    }

    fn render_field_error(&mut self, field: FieldId, message: &str) {
        self.errors.insert(field, message.to_owned());
    }

    fn clear_field_errors(&mut self) {
        self.errors.clear();
    }

    fn render_registration_success(&mut self, payload: &RegistrationPayload) {
        println!("\n[*] Registration complete, welcome {}!", payload.name());

        match serde_json::to_value(payload) {
            Ok(mut value) => {
                value["password"] = json!("********");
                println!("{value:#}");
            }
            Err(e) => error!("Could not serialize payload: {e}"),
        }
    }

    fn render_password_criteria(&mut self, criteria: &[CriterionResult]) {
        if !self.criteria_visible {
            return;
        }

        println!("Your password needs:");
        for result in criteria {
            let mark = if result.valid { 'x' } else { ' ' };
            println!("  [{mark}] {}", result.criterion.describe(&self.config));
        }
    }

    fn set_password_criteria_visible(&mut self, visible: bool) {
        self.criteria_visible = visible;
    }

    fn set_submit_enabled(&mut self, enabled: bool) {
        self.submit_enabled = enabled;
    }

    fn dismiss_success(&mut self) {
        self.values = FormSnapshot::new();
        self.submit_enabled = false;
    }
}

enum Choice {
    Edit { field: FieldId, line: String },
    Submit { enabled: bool },
    Quit,
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Choice::Edit { line, .. } => f.write_str(line),
            Choice::Submit { enabled: true } => f.write_str("Sign up"),
            Choice::Submit { enabled: false } => f.write_str("Sign up (incomplete)"),
            Choice::Quit => f.write_str("Quit"),
        }
    }
}

struct App {
    form: SignupForm<TerminalPresenter>,
}

impl App {
    fn new(form: SignupForm<TerminalPresenter>) -> Self {
        App { form }
    }

    fn start(&mut self) -> Result<()> {
        println!("Create your account.");
        self.enter_loop();
        Ok(())
    }

    fn edit(&mut self, field: FieldId) -> Result<()> {
        if field == FieldId::Password {
            self.form.on_password_focus();
        }

        let entered = prompt_field(field, self.form.presenter().values.get(field));
        if let Ok(Some(value)) = &entered {
            self.form.presenter_mut().values.set(field, value);
            self.form.on_field_input(field);
        }

        if field == FieldId::Password {
            self.form.on_password_blur();
        }
        entered?;
        Ok(())
    }
}

impl Menu for App {
    fn enter(&mut self) -> Result<MenuExit> {
        let presenter = self.form.presenter();
        let mut choices: Vec<Choice> = FieldId::iter()
            .map(|field| Choice::Edit {
                field,
                line: presenter.menu_line(field),
            })
            .collect();
        choices.push(Choice::Submit {
            enabled: presenter.submit_enabled,
        });
        choices.push(Choice::Quit);

        let Some(choice) = Select::new("Sign up form", choices).prompt_skippable()? else {
            return Ok(MENU_EXIT);
        };

        match choice {
            Choice::Edit { field, .. } => {
                self.edit(field)?;
                Ok(MENU_LOOP)
            }
            Choice::Submit { enabled: false } => {
                println!("[!] Fill in every field, with a password meeting all criteria, first.");
                Ok(MENU_LOOP)
            }
            Choice::Submit { enabled: true } => match self.form.submit() {
                Ok(_) => {
                    self.form.dismiss_success();
                    Ok(MENU_EXIT)
                }
                // The error is shown next to its field on the next pass
                Err(_) => Ok(MENU_LOOP),
            },
            Choice::Quit => Ok(MENU_EXIT),
        }
    }
}

/// Prompts for a new value. None keeps the current one.
fn prompt_field(field: FieldId, current: &str) -> InquireResult<Option<String>> {
    let message = format!("{}:", field.label());

    if field.is_secret() {
        Password::new(&message)
            .without_confirmation()
            .with_display_mode(PasswordDisplayMode::Masked)
            .prompt_skippable()
    } else {
        Text::new(&message)
            .with_initial_value(current)
            .prompt_skippable()
    }
}

fn main() -> Result<()> {
    dotenv().ok();
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let config = ValidationConfig::open(Path::new(CONFIG_FILE))?.with_env_overrides()?;
    info!(
        "Username length {:?}, password length {:?}",
        config.username_length(),
        config.password_length()
    );

    App::new(SignupForm::new(config, TerminalPresenter::new(config))).start()
}
