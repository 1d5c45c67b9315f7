use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::settings::{self, Theme};
use crate::store::StorageBackend;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeAction {
    Show,
    Set(Theme),
    Toggle,
}

pub fn theme<B: StorageBackend>(backend: &B, action: ThemeAction) -> Result<CmdResult> {
    let current = settings::load_theme(backend);
    let next = match action {
        ThemeAction::Show => return Ok(CmdResult::default().with_theme(current)),
        ThemeAction::Set(theme) => theme,
        ThemeAction::Toggle => current.toggled(),
    };

    settings::save_theme(backend, next)?;
    let mut result = CmdResult::default().with_theme(next);
    result.add_message(CmdMessage::success(format!("Theme set to {}", next)));
    Ok(result)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetLinkAction {
    Show,
    Set(String),
    Clear,
}

pub fn sheet_link<B: StorageBackend>(backend: &B, action: SheetLinkAction) -> Result<CmdResult> {
    match action {
        SheetLinkAction::Show => {
            let link = settings::load_sheet_link(backend);
            let mut result = CmdResult::default();
            if link.is_empty() {
                result.add_message(CmdMessage::info("No Google Sheets link configured."));
                return Ok(result);
            }
            Ok(result.with_sheet_link(link))
        }
        SheetLinkAction::Set(link) => {
            settings::save_sheet_link(backend, &link)?;
            let link = link.trim().to_string();
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::success("Google Sheets link saved"));
            Ok(result.with_sheet_link(link))
        }
        SheetLinkAction::Clear => {
            settings::save_sheet_link(backend, "")?;
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::success("Google Sheets link cleared"));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::store::mem_backend::MemBackend;

    #[test]
    fn toggle_persists() {
        let backend = MemBackend::new();
        let result = theme(&backend, ThemeAction::Toggle).unwrap();
        assert_eq!(result.theme, Some(Theme::Dark));
        assert_eq!(settings::load_theme(&backend), Theme::Dark);

        let result = theme(&backend, ThemeAction::Toggle).unwrap();
        assert_eq!(result.theme, Some(Theme::Light));
    }

    #[test]
    fn show_does_not_write() {
        let backend = MemBackend::new();
        let result = theme(&backend, ThemeAction::Show).unwrap();
        assert_eq!(result.theme, Some(Theme::Light));
        assert!(!backend.contains(crate::store::THEME_KEY));
    }

    #[test]
    fn sheet_link_lifecycle() {
        let backend = MemBackend::new();
        let link = "https://docs.google.com/spreadsheets/d/abc";

        let shown = sheet_link(&backend, SheetLinkAction::Show).unwrap();
        assert_eq!(shown.sheet_link, None);

        sheet_link(&backend, SheetLinkAction::Set(format!("  {}  ", link))).unwrap();
        let shown = sheet_link(&backend, SheetLinkAction::Show).unwrap();
        assert_eq!(shown.sheet_link.as_deref(), Some(link));

        sheet_link(&backend, SheetLinkAction::Clear).unwrap();
        assert_eq!(settings::load_sheet_link(&backend), "");
    }

    #[test]
    fn invalid_sheet_link_is_rejected() {
        let backend = MemBackend::new();
        let err = sheet_link(&backend, SheetLinkAction::Set("ftp://x".into())).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }
}
