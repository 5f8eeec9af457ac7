//! Interactive wizard
//!
//! Walks the seven wizard steps with terminal prompts. A step is repeated
//! until it validates; the last step writes the code and the state export.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use console::style;
use cta_builder::catalog::trees::ALL_CATEGORIES;
use cta_builder::catalog::{CtaInfo, OemProfile, CONFIRM_AVAILABILITY};
use cta_builder::config::BuilderConfig;
use cta_builder::generator::{format_code, generate_code, generate_preview_html};
use cta_builder::state::{
    CustomColors, DepartmentChoice, StyleChoice, StyleOverrides, Step, WizardState,
    DEFAULT_SHEEN_INTERVAL_SECS,
};
use cta_builder::validation::{is_valid_hex_color, ValidationErrors};
use cta_builder::wizard::options::{
    self, SelectOption, SliderSpec, CUSTOM_DEPARTMENT_VALUE, CUSTOM_VALUE,
    SLIDERS, TYPOGRAPHY_SELECTS,
};
use cta_builder::wizard::{ProgressState, Wizard};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, MultiSelect, Select};
use serde_json::json;

use super::{error_lines, read_state, write_file, FAILURE, SUCCESS};

/// What to do after the preview
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PreviewAction {
    Save,
    Back,
    Quit,
}

/// Run the wizard in the terminal
pub struct WizardCommand {
    settings: BuilderConfig,
    resume: Option<PathBuf>,
    output: Option<PathBuf>,
}

impl WizardCommand {
    /// Create a new command instance
    ///
    /// # Arguments
    ///
    /// * `resume` - State export to continue from
    /// * `output` - Where to write the code on save
    #[must_use]
    pub fn new(settings: BuilderConfig, resume: Option<PathBuf>, output: Option<PathBuf>) -> Self {
        Self {
            settings,
            resume,
            output,
        }
    }

    /// Code file written on save
    ///
    /// Defaults to `<output_dir>/<oem>-ctas.html`.
    #[must_use]
    pub fn output_path(&self, state: &WizardState) -> PathBuf {
        self.output.clone().unwrap_or_else(|| {
            let oem = state.oem().map_or("cta", |oem| oem.code.as_str());
            self.settings.output.output_dir.join(format!("{oem}-ctas.html"))
        })
    }

    /// Execute the command
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog or resumed state cannot be loaded, a
    /// prompt fails or the output cannot be written.
    pub fn execute(&self) -> Result<()> {
        let catalog = crate::settings::load_catalog(&self.settings)?;
        let state = match &self.resume {
            Some(path) => read_state(path)?,
            None => WizardState::new(),
        };
        let mut wizard = Wizard::with_state(catalog, state);
        let theme = ColorfulTheme::default();

        println!("{}", style("CTA Builder").green().bold());
        println!();

        loop {
            let step = wizard.state().current_step();
            print_header(&wizard);

            match step {
                Step::OemSelection => prompt_oem(&mut wizard, &theme)?,
                Step::CtaSelection => prompt_ctas(&mut wizard, &theme)?,
                Step::TreeConfiguration => prompt_trees(&mut wizard, &theme)?,
                Step::Styling => prompt_styling(&mut wizard, &theme)?,
                Step::AdvancedStyling => prompt_advanced(&mut wizard, &theme)?,
                Step::Placement => prompt_placement(&mut wizard, &theme)?,
                Step::Preview => match self.preview(&wizard, &theme)? {
                    PreviewAction::Save => return self.save(wizard.state(), wizard.catalog()),
                    PreviewAction::Back => {
                        wizard.back();
                        continue;
                    }
                    PreviewAction::Quit => {
                        println!("{}", style("Wizard cancelled. Nothing was written.").yellow());
                        return Ok(());
                    }
                },
            }

            if let Err(errors) = wizard.advance() {
                print_errors(&errors);
                let retry = Select::with_theme(&theme)
                    .with_prompt("How do you want to continue?")
                    .items(&["Edit this step again", "Back to previous step"])
                    .default(0)
                    .interact()?;
                if retry == 1 {
                    wizard.back();
                }
            }
        }
    }

    fn preview(&self, wizard: &Wizard, theme: &ColorfulTheme) -> Result<PreviewAction> {
        let code = format_code(&generate_code(wizard.state(), wizard.catalog()));
        println!("{code}");
        println!();
        println!(
            "{} {}",
            style("Will be written to").dim(),
            style(self.output_path(wizard.state()).display()).cyan()
        );

        let action = Select::with_theme(theme)
            .with_prompt("Preview & Export")
            .items(&[wizard.status().next_label, "Back", "Quit without saving"])
            .default(0)
            .interact()?;
        Ok(match action {
            0 => PreviewAction::Save,
            1 => PreviewAction::Back,
            _ => PreviewAction::Quit,
        })
    }

    fn save(&self, state: &WizardState, catalog: &cta_builder::catalog::Catalog) -> Result<()> {
        let mut code = generate_code(state, catalog);
        if self.settings.output.format_code {
            code = format_code(&code);
        }
        let code_path = self.output_path(state);
        write_file(&code_path, &code)?;
        println!("{}{} {}", SUCCESS, style("Code written to").green().bold(), style(code_path.display()).cyan());

        let state_path = code_path.with_extension("json");
        let exported = state.export_state().context("Failed to export wizard state")?;
        write_file(&state_path, &exported)?;
        println!("{}{} {}", SUCCESS, style("State saved to").green().bold(), style(state_path.display()).cyan());

        if self.settings.output.write_preview {
            let preview_path = sibling(&code_path, "preview.html");
            let preview = generate_preview_html(state, catalog).context("Failed to render preview")?;
            write_file(&preview_path, &preview)?;
            println!(
                "{}{} {}",
                SUCCESS,
                style("Preview written to").green().bold(),
                style(preview_path.display()).cyan()
            );
        }

        println!();
        println!("{}", style("Next steps:").bold());
        println!(
            "  {} {}",
            style("$").dim(),
            style(format!("cta-builder validate {}", state_path.display())).cyan()
        );
        Ok(())
    }
}

/// `<stem>-<suffix>` next to a file
fn sibling(path: &Path, suffix: &str) -> PathBuf {
    let stem = path
        .file_stem()
        .map_or_else(|| "cta".to_string(), |stem| stem.to_string_lossy().into_owned());
    path.with_file_name(format!("{stem}-{suffix}"))
}

fn print_header(wizard: &Wizard) {
    let status = wizard.status();
    let track: String = status
        .progress
        .iter()
        .map(|state| match state {
            ProgressState::Completed => '●',
            ProgressState::Active => '◉',
            ProgressState::Pending => '○',
        })
        .collect();
    println!();
    println!("{}  {}", style(track).cyan(), style(status.step).bold().underlined());
}

fn print_errors(errors: &ValidationErrors) {
    println!();
    if let Some(message) = errors.first_message() {
        println!("{}{}", FAILURE, style(message).red().bold());
    }
    if errors.count() > 1 {
        for line in error_lines(errors) {
            println!("    {}", style(line).dim());
        }
    }
}

fn labels(options: &[SelectOption]) -> Vec<&str> {
    options.iter().map(|option| option.label.as_str()).collect()
}

fn select_value(theme: &ColorfulTheme, prompt: &str, options: &[SelectOption], current: Option<&str>) -> Result<String> {
    let default = current
        .and_then(|current| options.iter().position(|option| option.value == current))
        .unwrap_or(0);
    let index = Select::with_theme(theme)
        .with_prompt(prompt)
        .items(&labels(options))
        .default(default)
        .interact()?;
    Ok(options[index].value.clone())
}

fn without_placeholder(options: Vec<SelectOption>) -> Vec<SelectOption> {
    options.into_iter().filter(|option| !option.is_placeholder()).collect()
}

fn prompt_oem(wizard: &mut Wizard, theme: &ColorfulTheme) -> Result<()> {
    let options = options::oem_options(wizard.catalog());
    if options.is_empty() {
        anyhow::bail!("The catalog lists no OEMs");
    }
    let current = wizard.state().oem().map(|oem| oem.code.clone());
    let code = select_value(theme, "Select OEM", &options, current.as_deref())?;
    wizard
        .choose_oem(&code)
        .with_context(|| format!("Failed to load palette for {code}"))
}

fn prompt_ctas(wizard: &mut Wizard, theme: &ColorfulTheme) -> Result<()> {
    let options = options::cta_options(wizard.catalog());
    let selected = wizard.state().selected_ctas();
    let defaults: Vec<bool> = options
        .iter()
        .map(|option| selected.contains(&option.value))
        .collect();

    let picked = MultiSelect::with_theme(theme)
        .with_prompt("Select CTAs (space to toggle)")
        .items(&labels(&options))
        .defaults(&defaults)
        .interact()?;
    let types: Vec<String> = picked.into_iter().map(|index| options[index].value.clone()).collect();
    wizard.select_ctas(&types)?;
    Ok(())
}

fn cta_infos(wizard: &Wizard) -> Vec<(String, CtaInfo)> {
    wizard
        .state()
        .selected_ctas()
        .iter()
        .filter_map(|cta_type| {
            wizard
                .catalog()
                .cta_info(cta_type)
                .map(|info| (cta_type.clone(), info.clone()))
        })
        .collect()
}

fn prompt_number(theme: &ColorfulTheme, prompt: &str) -> Result<u32> {
    Ok(Input::<u32>::with_theme(theme).with_prompt(prompt).interact_text()?)
}

fn prompt_trees(wizard: &mut Wizard, theme: &ColorfulTheme) -> Result<()> {
    for (cta_type, info) in cta_infos(wizard) {
        let name = info.display_name().to_string();
        let Some(config) = wizard.state().cta_config(&cta_type).cloned() else {
            continue;
        };

        let mut use_deeplink = false;
        let mut deeplink_step = None;
        if info.supports_deeplink {
            use_deeplink = Confirm::with_theme(theme)
                .with_prompt(format!("{name}: deeplink into the flow?"))
                .default(config.use_deeplink)
                .interact()?;
            if use_deeplink && info.requires_deeplink_step() {
                let steps = without_placeholder(options::deeplink_step_options(&info));
                deeplink_step = Some(select_value(
                    theme,
                    &format!("{name}: deeplink step"),
                    &steps,
                    config.deeplink_step.as_deref(),
                )?);
            }
        }

        let mut tree = config.tree.clone();
        let mut use_custom_tree = config.use_custom_tree;
        let mut department = config.department;
        if info.requires_tree && !use_deeplink {
            let category = info
                .tree_category
                .clone()
                .unwrap_or_else(|| ALL_CATEGORIES.to_string());
            let trees = without_placeholder(options::tree_options(wizard.catalog(), &category));
            let choice = select_value(theme, &format!("{name}: tree"), &trees, tree.as_deref())?;
            if choice == CUSTOM_VALUE {
                let id: String = Input::with_theme(theme)
                    .with_prompt(format!("{name}: custom tree ID"))
                    .interact_text()?;
                tree = Some(id);
                use_custom_tree = true;
            } else {
                tree = Some(choice);
                use_custom_tree = false;
            }

            department = if cta_type == CONFIRM_AVAILABILITY {
                Some(DepartmentChoice::Custom(Some(prompt_number(
                    theme,
                    &format!("{name}: department number"),
                )?)))
            } else {
                let departments =
                    without_placeholder(options::department_options(wizard.catalog(), &category));
                let current = department.and_then(DepartmentChoice::number).map(|n| n.to_string());
                let choice = select_value(
                    theme,
                    &format!("{name}: department"),
                    &departments,
                    current.as_deref(),
                )?;
                if choice == CUSTOM_DEPARTMENT_VALUE {
                    Some(DepartmentChoice::Custom(Some(prompt_number(
                        theme,
                        &format!("{name}: department number"),
                    )?)))
                } else {
                    choice.parse().ok().map(DepartmentChoice::Standard)
                }
            };
        }

        wizard.state_mut().update_cta_config(&cta_type, |config| {
            config.use_deeplink = use_deeplink;
            config.deeplink_step = deeplink_step;
            config.tree = tree;
            config.use_custom_tree = use_custom_tree;
            config.department = department;
        });
    }
    Ok(())
}

fn prompt_color(theme: &ColorfulTheme, prompt: &str, current: &str) -> Result<String> {
    Ok(Input::<String>::with_theme(theme)
        .with_prompt(prompt)
        .default(current.to_string())
        .validate_with(|value: &String| -> std::result::Result<(), String> {
            if is_valid_hex_color(value) {
                Ok(())
            } else {
                Err("Use a hex color like #1a2b3c".to_string())
            }
        })
        .interact_text()?)
}

fn prompt_style(theme: &ColorfulTheme, prompt: &str, profile: &OemProfile, current: &StyleChoice) -> Result<StyleChoice> {
    let styles = options::style_options(profile);
    let current_value = match current {
        StyleChoice::Oem(key) => key.as_str(),
        StyleChoice::Custom(_) => CUSTOM_VALUE,
    };
    let choice = select_value(theme, prompt, &styles, Some(current_value))?;
    if choice != CUSTOM_VALUE {
        return Ok(StyleChoice::Oem(choice));
    }

    let defaults = match current {
        StyleChoice::Custom(colors) => colors.clone(),
        StyleChoice::Oem(_) => CustomColors::default(),
    };
    Ok(StyleChoice::Custom(CustomColors {
        background_color: prompt_color(theme, "Background color", &defaults.background_color)?,
        text_color: prompt_color(theme, "Text color", &defaults.text_color)?,
        border_color: prompt_color(theme, "Border color", &defaults.border_color)?,
    }))
}

fn prompt_styling(wizard: &mut Wizard, theme: &ColorfulTheme) -> Result<()> {
    let profile = wizard
        .state()
        .oem_profile()
        .cloned()
        .context("No OEM selected")?;

    for (cta_type, info) in cta_infos(wizard) {
        let name = info.display_name().to_string();
        let Some(config) = wizard.state().cta_config(&cta_type).cloned() else {
            continue;
        };

        let labels = options::label_options(&info);
        let current_label = if config.use_custom_label { CUSTOM_VALUE } else { config.label.as_str() };
        let choice = select_value(theme, &format!("{name}: label"), &labels, Some(current_label))?;
        let (label, custom_label) = if choice == CUSTOM_VALUE {
            let custom: String = Input::with_theme(theme)
                .with_prompt(format!("{name}: custom label"))
                .with_initial_text(config.custom_label.clone().unwrap_or_default())
                .interact_text()?;
            (config.label.clone(), Some(custom))
        } else {
            (choice, None)
        };

        let style = prompt_style(theme, &format!("{name}: style"), &profile, &config.style)?;

        let sheen = Confirm::with_theme(theme)
            .with_prompt(format!("{name}: add sheen effect?"))
            .default(config.effects.sheen)
            .interact()?;
        let interval = if sheen {
            Input::<u32>::with_theme(theme)
                .with_prompt("Sheen cycle (seconds)")
                .default(config.effects.sheen_interval_secs)
                .validate_with(|secs: &u32| -> std::result::Result<(), &str> {
                    if *secs == 0 {
                        Err("The cycle must be at least one second")
                    } else {
                        Ok(())
                    }
                })
                .interact_text()?
        } else {
            DEFAULT_SHEEN_INTERVAL_SECS
        };

        wizard.state_mut().update_cta_config(&cta_type, |config| {
            config.use_custom_label = custom_label.is_some();
            config.custom_label = custom_label;
            config.label = label;
            config.style = style;
            config.effects.sheen = sheen;
            config.effects.sheen_interval_secs = interval;
        });

        let adjust = Confirm::with_theme(theme)
            .with_prompt(format!("{name}: adjust size and spacing?"))
            .default(!config.overrides.is_empty())
            .interact()?;
        if adjust {
            prompt_cta_spacing(wizard, theme, &cta_type, &config.overrides)?;
        }
    }
    Ok(())
}

/// Sliders offered per CTA on the styling step
const CTA_SLIDER_PROPERTIES: [&str; 4] = ["borderRadius", "marginTop", "marginBottom", "padding"];

fn prompt_cta_spacing(
    wizard: &mut Wizard,
    theme: &ColorfulTheme,
    cta_type: &str,
    current: &StyleOverrides,
) -> Result<()> {
    for property in CTA_SLIDER_PROPERTIES {
        let slider = SliderSpec::for_property(property).context("Unknown slider")?;
        if let Some(value) = prompt_slider(theme, slider, current.get(property))? {
            let patch = property_patch(property, &value)?;
            wizard
                .state_mut()
                .update_cta_config(cta_type, |config| config.overrides.apply(&patch));
        }
    }
    Ok(())
}

/// Override patch setting a single property
fn property_patch(property: &str, value: &str) -> Result<StyleOverrides> {
    serde_json::from_value(json!({ property: value }))
        .with_context(|| format!("Invalid value for {property}: {value}"))
}

fn prompt_slider(theme: &ColorfulTheme, slider: &SliderSpec, current: Option<&str>) -> Result<Option<String>> {
    let value: String = Input::with_theme(theme)
        .with_prompt(format!(
            "{} ({}-{}{}, blank to inherit)",
            slider.label, slider.min, slider.max, slider.unit
        ))
        .with_initial_text(current.unwrap_or_default())
        .allow_empty(true)
        .validate_with(move |value: &String| -> std::result::Result<(), String> {
            if value.trim().is_empty() || slider.accepts(value.trim()) {
                Ok(())
            } else {
                Err(slider.range_message())
            }
        })
        .interact_text()?;

    Ok(slider_answer(slider, &value))
}

/// Override value for a slider answer
///
/// A blank answer yields an empty value, which clears the override so the
/// property inherits again.
fn slider_answer(slider: &SliderSpec, answer: &str) -> Option<String> {
    let answer = answer.trim();
    if answer.is_empty() {
        return Some(String::new());
    }
    slider.parse(answer).map(|number| slider.format(number))
}

fn prompt_advanced(wizard: &mut Wizard, theme: &ColorfulTheme) -> Result<()> {
    let separate = Confirm::with_theme(theme)
        .with_prompt("Style SRP and VDP buttons separately?")
        .default(wizard.state().separate_styling())
        .interact()?;
    wizard.state_mut().set_separate_styling(separate);

    for &target in wizard.state().advanced().active_targets() {
        let customize = Confirm::with_theme(theme)
            .with_prompt(format!("Customize {target} typography and spacing?"))
            .default(false)
            .interact()?;
        if !customize {
            continue;
        }

        let current = wizard.state().advanced().target(target).clone();
        for select in &TYPOGRAPHY_SELECTS {
            let value = select_value(theme, select.label, &select.options(), current.get(select.property))?;
            let patch = property_patch(select.property, &value)?;
            wizard.state_mut().update_advanced_styles(target, &patch);
        }
        for slider in &SLIDERS {
            if let Some(value) = prompt_slider(theme, slider, current.get(slider.property))? {
                let patch = property_patch(slider.property, &value)?;
                wizard.state_mut().update_advanced_styles(target, &patch);
            }
        }
    }
    Ok(())
}

fn prompt_placement(wizard: &mut Wizard, theme: &ColorfulTheme) -> Result<()> {
    let profile = wizard
        .state()
        .oem_profile()
        .cloned()
        .context("No OEM selected")?;

    for (cta_type, info) in cta_infos(wizard) {
        let name = info.display_name().to_string();
        let Some(config) = wizard.state().cta_config(&cta_type).cloned() else {
            continue;
        };

        let srp = Confirm::with_theme(theme)
            .with_prompt(format!("{name}: show on SRP?"))
            .default(config.placement.srp)
            .interact()?;
        let vdp = Confirm::with_theme(theme)
            .with_prompt(format!("{name}: show on VDP?"))
            .default(config.placement.vdp)
            .interact()?;

        let devices = options::device_options();
        let current_device = devices
            .iter()
            .find(|option| options::parse_device(&option.value) == Some(config.placement.device))
            .map(|option| option.value.clone());
        let device_value = select_value(theme, &format!("{name}: devices"), &devices, current_device.as_deref())?;
        let device = options::parse_device(&device_value).unwrap_or_default();

        let same_style = if srp && vdp {
            Confirm::with_theme(theme)
                .with_prompt(format!("{name}: same style on SRP and VDP?"))
                .default(config.placement.same_style)
                .interact()?
        } else {
            true
        };
        let vdp_style = if same_style {
            config.vdp_style.clone()
        } else {
            let current = config.vdp_style.clone().unwrap_or_else(|| config.style.clone());
            Some(prompt_style(theme, &format!("{name}: VDP style"), &profile, &current)?)
        };

        wizard.state_mut().update_cta_config(&cta_type, |config| {
            config.placement.srp = srp;
            config.placement.vdp = vdp;
            config.placement.device = device;
            config.placement.same_style = same_style;
            config.vdp_style = vdp_style;
        });
    }
    Ok(())
}
