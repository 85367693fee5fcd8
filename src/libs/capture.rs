//! Screen capture through the platform's screenshot tool.
//!
//! Rather than binding to a windowing system, [`CommandCapture`] runs an
//! external program that writes a screenshot to a file. The file is a
//! [`tempfile::NamedTempFile`] handed to the resulting [`RawImage`], so the
//! screenshot disappears from disk as soon as the image is dropped.
//!
//! The command is either configured explicitly (`capture_command` in the
//! monitor configuration, with a `{path}` placeholder for the output file) or
//! detected per platform:
//!
//! - **macOS**: `screencapture -x {path}`
//! - **Windows**: a PowerShell snippet using `System.Drawing`
//! - **Linux and others**: the first of `grim`, `gnome-screenshot`, `import`
//!   found on `PATH`

use crate::libs::config::MonitorConfig;
use crate::libs::messages::Message;
use crate::libs::sampler::{CaptureError, RawImage, ScreenCapture};
use image::ImageReader;
use std::env;
use std::path::Path;
use std::process::Command;

pub const PATH_PLACEHOLDER: &str = "{path}";

const WINDOWS_CAPTURE_SCRIPT: &str = "Add-Type -AssemblyName System.Windows.Forms,System.Drawing; \
$b = [System.Windows.Forms.Screen]::PrimaryScreen.Bounds; \
$bmp = New-Object System.Drawing.Bitmap $b.Width, $b.Height; \
$g = [System.Drawing.Graphics]::FromImage($bmp); \
$g.CopyFromScreen($b.Location, [System.Drawing.Point]::Empty, $b.Size); \
$bmp.Save('{path}', [System.Drawing.Imaging.ImageFormat]::Png)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandCapture {
    program: String,
    args: Vec<String>,
}

impl CommandCapture {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Builds a capture from a whitespace separated command line such as
    /// `grim -t png {path}`.
    pub fn from_command_line(line: &str) -> Result<Self, CaptureError> {
        let mut parts = line.split_whitespace().map(str::to_string);
        let program = parts.next().ok_or_else(|| CaptureError::Unavailable(Message::CaptureCommandEmpty.to_string()))?;
        Ok(Self::new(program, parts.collect()))
    }

    /// Uses the configured command when there is one, otherwise detects a tool.
    pub fn from_config(config: &MonitorConfig) -> Result<Self, CaptureError> {
        match config.capture_command.as_deref().map(str::trim) {
            Some(line) if !line.is_empty() => Self::from_command_line(line),
            _ => Self::detect(),
        }
    }

    pub fn detect() -> Result<Self, CaptureError> {
        match env::consts::OS {
            "macos" => Ok(Self::new("screencapture", vec!["-x".into(), PATH_PLACEHOLDER.into()])),
            "windows" => Ok(Self::new(
                "powershell",
                vec!["-NoProfile".into(), "-Command".into(), WINDOWS_CAPTURE_SCRIPT.into()],
            )),
            _ => {
                let candidates: [(&str, &[&str]); 3] = [
                    ("grim", &[PATH_PLACEHOLDER]),
                    ("gnome-screenshot", &["-f", PATH_PLACEHOLDER]),
                    ("import", &["-window", "root", PATH_PLACEHOLDER]),
                ];
                candidates
                    .iter()
                    .find(|(program, _)| is_on_path(program))
                    .map(|(program, args)| Self::new(*program, args.iter().map(|a| a.to_string()).collect()))
                    .ok_or_else(|| CaptureError::Unavailable(Message::CaptureToolNotFound.to_string()))
            }
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments with the placeholder replaced by `output`.
    pub fn args_for(&self, output: &Path) -> Vec<String> {
        let output = output.to_string_lossy();
        self.args.iter().map(|arg| arg.replace(PATH_PLACEHOLDER, &output)).collect()
    }
}

impl ScreenCapture for CommandCapture {
    fn capture(&self) -> Result<RawImage, CaptureError> {
        let file = tempfile::Builder::new().prefix("focuswatch-").suffix(".png").tempfile()?;

        let output = Command::new(&self.program).args(self.args_for(file.path())).output()?;
        if !output.status.success() {
            return Err(CaptureError::Command(
                Message::CaptureCommandFailed(self.program.clone(), output.status.to_string()).to_string(),
            ));
        }

        if std::fs::metadata(file.path())?.len() == 0 {
            return Err(CaptureError::Command(Message::CaptureFileEmpty.to_string()));
        }

        let pixels = ImageReader::open(file.path())?.with_guessed_format()?.decode()?;
        Ok(RawImage::from_file(pixels, file))
    }
}

fn is_on_path(program: &str) -> bool {
    env::var_os("PATH")
        .map(|paths| env::split_paths(&paths).any(|dir| dir.join(program).is_file()))
        .unwrap_or(false)
}
