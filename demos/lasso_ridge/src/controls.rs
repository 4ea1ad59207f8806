use std::io;

use dialoguer::{theme::ColorfulTheme, Input, Select};
use shrinkage::Params;

/// The adjustable parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Control {
    Samples,
    Features,
    Informative,
    Noise,
    Seed,
    Alpha,
}

impl Control {
    const ALL: [Control; 6] = [
        Control::Samples,
        Control::Features,
        Control::Informative,
        Control::Noise,
        Control::Seed,
        Control::Alpha,
    ];

    fn name(&self) -> &'static str {
        match self {
            Control::Samples => "Number of Samples",
            Control::Features => "Number of Features",
            Control::Informative => "Number of Informative Features",
            Control::Noise => "Noise Level",
            Control::Seed => "Random State",
            Control::Alpha => "Select Alpha for Detailed Metrics",
        }
    }

    /// Menu entry showing the current value
    fn label(&self, params: &Params) -> String {
        let value = match self {
            Control::Samples => params.n_samples.to_string(),
            Control::Features => params.n_features.to_string(),
            Control::Informative => params.n_informative.to_string(),
            Control::Noise => format!("{:?}", params.noise),
            Control::Seed => params.seed.to_string(),
            Control::Alpha => format!("{:?}", params.alpha),
        };
        format!("{} ({})", self.name(), value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Action {
    Adjust(Control),
    Quit,
}

/// Ask which parameter to change next
pub(crate) fn next_action(params: &Params) -> io::Result<Action> {
    let mut items: Vec<String> = Control::ALL.iter().map(|c| c.label(params)).collect();
    items.push("Quit".to_string());

    let e = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Adjust a parameter")
        .items(&items)
        .default(0)
        .interact()?;

    Ok(Control::ALL
        .get(e)
        .map(|c| Action::Adjust(*c))
        .unwrap_or(Action::Quit))
}

/// Prompt for a new value of `control` and store it in `params`
pub(crate) fn adjust(params: &mut Params, control: Control) -> io::Result<()> {
    let theme = ColorfulTheme::default();
    match control {
        Control::Samples => {
            params.n_samples = Input::with_theme(&theme)
                .with_prompt(control.name())
                .default(params.n_samples)
                .validate_with(|v: &usize| check_samples(*v))
                .interact_text()?;
        }
        Control::Features => {
            let n_features: usize = Input::with_theme(&theme)
                .with_prompt(control.name())
                .default(params.n_features)
                .validate_with(|v: &usize| check_features(*v))
                .interact_text()?;
            params.set_n_features(n_features);
        }
        Control::Informative => {
            let n_features = params.n_features;
            params.n_informative = Input::with_theme(&theme)
                .with_prompt(control.name())
                .default(params.n_informative)
                .validate_with(move |v: &usize| check_informative(*v, n_features))
                .interact_text()?;
        }
        Control::Noise => {
            params.noise = Input::with_theme(&theme)
                .with_prompt(control.name())
                .default(params.noise)
                .validate_with(|v: &f64| check_noise(*v))
                .interact_text()?;
        }
        Control::Seed => {
            params.seed = Input::with_theme(&theme)
                .with_prompt(control.name())
                .default(params.seed)
                .interact_text()?;
        }
        Control::Alpha => {
            let choices: Vec<String> =
                Params::ALPHA_CHOICES.iter().map(|a| format!("{:?}", a)).collect();
            let e = Select::with_theme(&theme)
                .with_prompt(control.name())
                .items(&choices)
                .default(params.alpha_index().unwrap_or(4))
                .interact()?;
            params.alpha = Params::ALPHA_CHOICES[e];
        }
    }
    debug!("{} set, params now {:?}", control.name(), params);
    Ok(())
}

fn check_samples(v: usize) -> Result<(), String> {
    if !Params::N_SAMPLES_RANGE.contains(&v) || v % Params::N_SAMPLES_STEP != 0 {
        return Err(format!(
            "must be a multiple of {} between {} and {}",
            Params::N_SAMPLES_STEP,
            Params::N_SAMPLES_RANGE.start(),
            Params::N_SAMPLES_RANGE.end()
        ));
    }
    Ok(())
}

fn check_features(v: usize) -> Result<(), String> {
    if !Params::N_FEATURES_RANGE.contains(&v) {
        return Err(format!(
            "must be between {} and {}",
            Params::N_FEATURES_RANGE.start(),
            Params::N_FEATURES_RANGE.end()
        ));
    }
    Ok(())
}

fn check_informative(v: usize, n_features: usize) -> Result<(), String> {
    if v < 1 || v > n_features {
        return Err(format!("must be between 1 and {}", n_features));
    }
    Ok(())
}

fn check_noise(v: f64) -> Result<(), String> {
    if !Params::NOISE_RANGE.contains(&v) || v.fract() != 0.0 {
        return Err(format!(
            "must be a whole number between {} and {}",
            Params::NOISE_RANGE.start(),
            Params::NOISE_RANGE.end()
        ));
    }
    Ok(())
}
