//! Rendering of theme documents to the editor's color theme format.

use serde::Serialize;
use std::collections::BTreeMap;

use themed_palette::Color;

use crate::expand::{BaseSlot, Slot, SyntaxSlot, ThemeDocument};

/// UI theme kind of every generated theme.
pub const THEME_KIND: &str = "dark";

/// A color theme file as the editor loads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditorTheme {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
    /// Workbench colors
    pub colors: BTreeMap<String, Color>,
    #[serde(rename = "tokenColors")]
    pub token_colors: Vec<TokenColor>,
}

/// One TextMate scope rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenColor {
    pub name: &'static str,
    pub scope: &'static [&'static str],
    pub settings: TokenSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenSettings {
    pub foreground: Color,
}

/// Workbench keys driven by each base color.
fn workbench_keys(slot: BaseSlot) -> &'static [&'static str] {
    match slot {
        BaseSlot::Background => &[
            "editor.background",
            "panel.background",
            "sideBar.background",
            "terminal.background",
        ],
        BaseSlot::Foreground => &["editor.foreground", "foreground", "terminal.foreground"],
        BaseSlot::Color1 => &["activityBarBadge.background", "editorCursor.foreground"],
        BaseSlot::Color2 => &["editorLineNumber.activeForeground"],
        BaseSlot::Color3 => &["editorBracketMatch.border"],
        BaseSlot::Color4 => &["focusBorder", "textLink.foreground"],
    }
}

/// Display name and scopes of a syntax category.
fn token_rule(slot: SyntaxSlot) -> (&'static str, &'static [&'static str]) {
    match slot {
        SyntaxSlot::CssClass => ("CSS class", &["entity.other.attribute-name.class.css"]),
        SyntaxSlot::CssId => ("CSS ID", &["entity.other.attribute-name.id.css"]),
        SyntaxSlot::CssTag => ("CSS tag", &["entity.name.tag.css"]),
        SyntaxSlot::Number => ("Number", &["constant.numeric"]),
        SyntaxSlot::Comment => ("Comment", &["comment", "punctuation.definition.comment"]),
        SyntaxSlot::Keyword => ("Keyword", &["keyword", "keyword.control"]),
        SyntaxSlot::String => ("String", &["string", "punctuation.definition.string"]),
        SyntaxSlot::Type => ("Type", &["support.type", "entity.name.type", "storage.type"]),
        SyntaxSlot::Storage => ("Storage", &["storage"]),
        SyntaxSlot::Function => ("Function", &["entity.name.function"]),
        SyntaxSlot::FunctionCall => ("Function call", &["support.function", "meta.function-call"]),
        SyntaxSlot::Modifier => ("Modifier", &["storage.modifier"]),
        SyntaxSlot::Identifier => ("Identifier", &["variable", "support.variable"]),
    }
}

/// Render a theme document. Overrides win over base-derived workbench keys.
pub fn render(document: &ThemeDocument) -> EditorTheme {
    let mut colors = BTreeMap::new();
    for slot in BaseSlot::ALL {
        let color = document.get(Slot::Base(slot));
        for key in workbench_keys(slot) {
            colors.insert((*key).to_string(), color.clone());
        }
    }
    for (key, color) in document.overrides() {
        colors.insert(key.clone(), color.clone());
    }

    let token_colors = SyntaxSlot::ALL
        .into_iter()
        .map(|slot| {
            let (name, scope) = token_rule(slot);
            TokenColor {
                name,
                scope,
                settings: TokenSettings {
                    foreground: document.syntax_color(slot).clone(),
                },
            }
        })
        .collect();

    EditorTheme {
        name: document.name.clone(),
        kind: THEME_KIND,
        colors,
        token_colors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expand::expand;
    use std::collections::HashSet;
    use themed_palette::{Variant, VariantKind};

    fn marine_theme() -> (ThemeDocument, EditorTheme) {
        let variant = Variant::builtin(VariantKind::Max).unwrap();
        let doc = expand(&variant.registry.palettes()[0], &variant.label_prefix);
        let theme = render(&doc);
        (doc, theme)
    }

    #[test]
    fn test_render_top_level_shape() {
        let (_, theme) = marine_theme();
        let value = serde_json::to_value(&theme).unwrap();
        assert_eq!(value["name"], "TT Max Marine");
        assert_eq!(value["type"], "dark");
        assert!(value["colors"].is_object());
        assert_eq!(value["tokenColors"].as_array().unwrap().len(), 13);
    }

    #[test]
    fn test_render_colors() {
        let (_, theme) = marine_theme();
        assert_eq!(theme.colors["editor.background"].as_str(), "#222222");
        assert_eq!(theme.colors["editor.foreground"].as_str(), "#dddddd");
        assert_eq!(theme.colors["editorCursor.foreground"].as_str(), "#1166ff");
        assert_eq!(theme.colors["titleBar.activeBackground"].as_str(), "#0066aa");
        assert_eq!(theme.colors["statusBar.foreground"].as_str(), "#ffffff");
    }

    #[test]
    fn test_token_colors_follow_syntax() {
        let (doc, theme) = marine_theme();
        for (rule, slot) in theme.token_colors.iter().zip(SyntaxSlot::ALL) {
            assert_eq!(&rule.settings.foreground, doc.syntax_color(slot));
        }
        let comment = theme
            .token_colors
            .iter()
            .find(|rule| rule.scope.contains(&"comment"))
            .unwrap();
        assert_eq!(comment.settings.foreground.as_str(), "#4499bb");
    }

    #[test]
    fn test_render_invents_no_colors() {
        let (doc, theme) = marine_theme();
        let allowed: HashSet<&Color> = Slot::all().map(|slot| doc.get(slot)).collect();
        for color in theme.colors.values() {
            assert!(allowed.contains(color), "{}", color);
        }
        for rule in &theme.token_colors {
            assert!(allowed.contains(&rule.settings.foreground));
        }
    }

    #[test]
    fn test_scopes_are_not_shared() {
        let mut seen = HashSet::new();
        for slot in SyntaxSlot::ALL {
            for scope in token_rule(slot).1 {
                assert!(seen.insert(*scope), "scope {} listed twice", scope);
            }
        }
    }
}
