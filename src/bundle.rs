//! Embedded content deployed into the framework workspace.
//!
//! The module scripts and the README are compiled into the binary from
//! `src/templates/`. The script set is fixed: four modules, run in the
//! order they appear here.

/// A module script deployed into `scripts/`.
#[derive(Debug, Clone, Copy)]
pub struct ModuleScript {
    /// File name under `scripts/`.
    pub name: &'static str,
    /// Human-readable module name used in log lines.
    pub label: &'static str,
    /// Script body, rewritten on every initialization.
    pub content: &'static str,
}

static MODULE_SCRIPTS: [ModuleScript; 4] = [
    ModuleScript {
        name: "neural_network_training.py",
        label: "neural network training",
        content: include_str!("templates/neural_network_training.py"),
    },
    ModuleScript {
        name: "speech_recognition.py",
        label: "speech recognition",
        content: include_str!("templates/speech_recognition.py"),
    },
    ModuleScript {
        name: "image_generation.py",
        label: "image generation",
        content: include_str!("templates/image_generation.py"),
    },
    ModuleScript {
        name: "energy_visualization.py",
        label: "energy visualization",
        content: include_str!("templates/energy_visualization.py"),
    },
];

/// Returns the module scripts in execution order.
pub fn module_scripts() -> &'static [ModuleScript] {
    &MODULE_SCRIPTS
}

/// Returns the `docs/README.md` body.
pub fn readme_content() -> &'static str {
    include_str!("templates/README.md")
}
