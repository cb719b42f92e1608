//! Check registry
//!
//! Maps check names to inspection functions and their option schemas. Every
//! check goes through the same contract: objects in, [`Report`] out. New checks
//! are added with [`CheckRegistry::register`]; no check knows about another.

use std::fmt;

use crate::core::CheckError;
use crate::core::models::{
    BuiltinCheck, CheckOptions, ObjectRef, OptionSpec, OptionValue, Preset, Report,
};
use crate::core::ports::SceneQuery;

use super::checks;

/// Uniform check signature: scene, objects, resolved options
pub type CheckFn = fn(&dyn SceneQuery, &[ObjectRef], &CheckOptions) -> Result<Report, CheckError>;

/// A registered check
#[derive(Clone)]
pub struct CheckDefinition {
    /// Unique name
    pub name: String,
    /// One-line description
    pub description: String,
    /// Accepted options and their defaults
    pub options: Vec<OptionSpec>,
    /// The inspection function
    pub run: CheckFn,
}

impl fmt::Debug for CheckDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheckDefinition")
            .field("name", &self.name)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl CheckDefinition {
    /// Create a definition without options
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>, run: CheckFn) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            options: Vec::new(),
            run,
        }
    }

    /// Add an option to the schema
    #[must_use]
    pub fn with_option(mut self, option: OptionSpec) -> Self {
        self.options.push(option);
        self
    }

    /// Schema entry for an option name
    #[must_use]
    pub fn option(&self, name: &str) -> Option<&OptionSpec> {
        self.options.iter().find(|o| o.name == name)
    }

    /// Fill defaults and validate overrides against the schema
    pub fn resolve_options(&self, overrides: &CheckOptions) -> Result<CheckOptions, CheckError> {
        let mut resolved: CheckOptions =
            self.options.iter().map(|o| (o.name.to_string(), o.default.clone())).collect();

        for (name, value) in overrides {
            let spec = self.option(name).ok_or_else(|| CheckError::UnknownOption {
                check: self.name.clone(),
                option: name.clone(),
            })?;
            if spec.kind() != value.kind() {
                return Err(CheckError::InvalidOption {
                    check: self.name.clone(),
                    option: name.clone(),
                    reason: format!("expected {}, got {}", spec.kind(), value.kind()),
                });
            }
            resolved.insert(name.clone(), value.clone());
        }

        Ok(resolved)
    }

    /// Parse raw user input for one option
    pub fn parse_option(&self, name: &str, raw: &str) -> Result<OptionValue, CheckError> {
        let spec = self.option(name).ok_or_else(|| CheckError::UnknownOption {
            check: self.name.clone(),
            option: name.to_string(),
        })?;
        OptionValue::parse_as(spec.kind(), raw).map_err(|reason| CheckError::InvalidOption {
            check: self.name.clone(),
            option: name.to_string(),
            reason,
        })
    }
}

/// Registry of available checks, in registration order
#[derive(Debug, Clone, Default)]
pub struct CheckRegistry {
    checks: Vec<CheckDefinition>,
}

impl CheckRegistry {
    /// Creates a new empty registry
    #[must_use]
    pub const fn new() -> Self {
        Self { checks: Vec::new() }
    }

    /// Creates a registry with the built-in checks registered
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            checks: BuiltinCheck::ALL.into_iter().map(builtin_definition).collect(),
        }
    }

    /// Registers a new check
    pub fn register(&mut self, definition: CheckDefinition) -> Result<(), CheckError> {
        if self.get(&definition.name).is_some() {
            return Err(CheckError::DuplicateCheck(definition.name));
        }
        log::debug!("registered check {}", definition.name);
        self.checks.push(definition);
        Ok(())
    }

    /// Looks up a check by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CheckDefinition> {
        self.checks.iter().find(|c| c.name == name)
    }

    /// Looks up a check, failing with [`CheckError::UnknownCheck`]
    pub fn require(&self, name: &str) -> Result<&CheckDefinition, CheckError> {
        self.get(name).ok_or_else(|| CheckError::UnknownCheck(name.to_string()))
    }

    /// All registered definitions
    #[must_use]
    pub fn definitions(&self) -> &[CheckDefinition] {
        &self.checks
    }

    /// All registered names
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.checks.iter().map(|c| c.name.as_str()).collect()
    }

    /// Returns the number of registered checks
    #[must_use]
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    /// Returns true if no checks are registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Resolve a check's options from preset overrides
    pub fn resolve_options(&self, name: &str, overrides: &CheckOptions) -> Result<CheckOptions, CheckError> {
        self.require(name)?.resolve_options(overrides)
    }

    /// Runs one check over the given objects
    pub fn run(
        &self,
        name: &str,
        scene: &dyn SceneQuery,
        objects: &[ObjectRef],
        overrides: &CheckOptions,
    ) -> Result<Report, CheckError> {
        let definition = self.require(name)?;
        let options = definition.resolve_options(overrides)?;
        log::debug!("running {name} on {} object(s)", objects.len());
        let report = (definition.run)(scene, objects, &options)?;
        log::debug!("{name}: {} discrepancy(ies)", report.len());
        Ok(report)
    }

    /// Checks that every preset entry names a registered check with valid options
    pub fn validate_preset(&self, preset: &Preset) -> Result<(), CheckError> {
        for (_, entry) in preset.entries() {
            self.resolve_options(&entry.check, &entry.options)?;
        }
        Ok(())
    }
}

/// Name of the `triangle_count` budget option
pub const MAX_TRIANGLES_OPTION: &str = "max";

/// Name of the `naming_convention` prefix option
pub const PREFIXES_OPTION: &str = "prefixes";

/// Default triangle budget
pub const DEFAULT_MAX_TRIANGLES: i64 = 10_000;

/// Default required name prefix
pub const DEFAULT_PREFIXES: &str = "_v";

fn builtin_definition(check: BuiltinCheck) -> CheckDefinition {
    let run: CheckFn = match check {
        BuiltinCheck::TriangleCount => run_triangle_count,
        BuiltinCheck::LaminaFaces => run_lamina_faces,
        BuiltinCheck::MissingUvShells => run_missing_uv_shells,
        BuiltinCheck::NamingConvention => run_naming_convention,
        BuiltinCheck::ConstructionHistory => run_construction_history,
    };

    let definition = CheckDefinition::new(check.name(), check.description(), run);
    match check {
        BuiltinCheck::TriangleCount => definition.with_option(OptionSpec {
            name: MAX_TRIANGLES_OPTION,
            description: "Maximum triangle count per object",
            default: OptionValue::Integer(DEFAULT_MAX_TRIANGLES),
        }),
        BuiltinCheck::NamingConvention => definition.with_option(OptionSpec {
            name: PREFIXES_OPTION,
            description: "Comma-separated substrings every object name must contain",
            default: OptionValue::Text(DEFAULT_PREFIXES.to_string()),
        }),
        _ => definition,
    }
}

fn option<'a>(check: BuiltinCheck, options: &'a CheckOptions, name: &str) -> Result<&'a OptionValue, CheckError> {
    options.get(name).ok_or_else(|| CheckError::InvalidOption {
        check: check.name().to_string(),
        option: name.to_string(),
        reason: "missing value".to_string(),
    })
}

fn run_triangle_count(
    scene: &dyn SceneQuery,
    objects: &[ObjectRef],
    options: &CheckOptions,
) -> Result<Report, CheckError> {
    let check = BuiltinCheck::TriangleCount;
    let value = option(check, options, MAX_TRIANGLES_OPTION)?;
    let invalid = |reason: &str| CheckError::InvalidOption {
        check: check.name().to_string(),
        option: MAX_TRIANGLES_OPTION.to_string(),
        reason: reason.to_string(),
    };
    let max = value.as_integer().ok_or_else(|| invalid("expected integer"))?;
    let max = usize::try_from(max).map_err(|_| invalid("must not be negative"))?;
    Ok(checks::triangle_count(scene, objects, max)?)
}

fn run_lamina_faces(
    scene: &dyn SceneQuery,
    objects: &[ObjectRef],
    _options: &CheckOptions,
) -> Result<Report, CheckError> {
    Ok(checks::lamina_faces(scene, objects)?)
}

fn run_missing_uv_shells(
    scene: &dyn SceneQuery,
    objects: &[ObjectRef],
    _options: &CheckOptions,
) -> Result<Report, CheckError> {
    Ok(checks::missing_uv_shells(scene, objects)?)
}

fn run_construction_history(
    scene: &dyn SceneQuery,
    objects: &[ObjectRef],
    _options: &CheckOptions,
) -> Result<Report, CheckError> {
    Ok(checks::construction_history(scene, objects)?)
}

fn run_naming_convention(
    _scene: &dyn SceneQuery,
    objects: &[ObjectRef],
    options: &CheckOptions,
) -> Result<Report, CheckError> {
    let check = BuiltinCheck::NamingConvention;
    let value = option(check, options, PREFIXES_OPTION)?;
    let raw = value.as_text().ok_or_else(|| CheckError::InvalidOption {
        check: check.name().to_string(),
        option: PREFIXES_OPTION.to_string(),
        reason: "expected text".to_string(),
    })?;
    let prefixes: Vec<&str> = raw.split(',').map(str::trim).collect();
    Ok(checks::naming_convention(objects, &prefixes))
}
