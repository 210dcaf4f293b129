//! Palette to theme document expansion.
//!
//! Every color slot of a [`ThemeDocument`] is filled from a single recipe
//! entry, see [`recipe`]. The recipe only ever points at a palette role or at
//! one of the fixed ramp shades, so expansion never invents a color.

use serde::Serialize;
use std::collections::BTreeMap;

use themed_palette::{Color, Palette, Role, BLACK, WHITE};

use crate::naming;

/// Where a slot takes its color from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Palette(Role),
    Fixed(&'static str),
}

impl Source {
    fn resolve(self, palette: &Palette) -> Color {
        match self {
            Source::Palette(role) => palette.color(role).clone(),
            Source::Fixed(value) => Color::fixed(value),
        }
    }
}

/// Base colors of the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BaseSlot {
    Background,
    Foreground,
    Color1,
    Color2,
    Color3,
    Color4,
}

impl BaseSlot {
    pub const ALL: [BaseSlot; 6] = [
        BaseSlot::Background,
        BaseSlot::Foreground,
        BaseSlot::Color1,
        BaseSlot::Color2,
        BaseSlot::Color3,
        BaseSlot::Color4,
    ];
}

/// Lexical categories that receive their own color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SyntaxSlot {
    CssClass,
    CssId,
    CssTag,
    Number,
    Comment,
    Keyword,
    String,
    Type,
    Storage,
    Function,
    FunctionCall,
    Modifier,
    Identifier,
}

impl SyntaxSlot {
    pub const ALL: [SyntaxSlot; 13] = [
        SyntaxSlot::CssClass,
        SyntaxSlot::CssId,
        SyntaxSlot::CssTag,
        SyntaxSlot::Number,
        SyntaxSlot::Comment,
        SyntaxSlot::Keyword,
        SyntaxSlot::String,
        SyntaxSlot::Type,
        SyntaxSlot::Storage,
        SyntaxSlot::Function,
        SyntaxSlot::FunctionCall,
        SyntaxSlot::Modifier,
        SyntaxSlot::Identifier,
    ];

    /// Key of the category in the document, e.g. `functionCall`.
    pub fn key(self) -> &'static str {
        match self {
            SyntaxSlot::CssClass => "cssClass",
            SyntaxSlot::CssId => "cssId",
            SyntaxSlot::CssTag => "cssTag",
            SyntaxSlot::Number => "number",
            SyntaxSlot::Comment => "comment",
            SyntaxSlot::Keyword => "keyword",
            SyntaxSlot::String => "string",
            SyntaxSlot::Type => "type",
            SyntaxSlot::Storage => "storage",
            SyntaxSlot::Function => "function",
            SyntaxSlot::FunctionCall => "functionCall",
            SyntaxSlot::Modifier => "modifier",
            SyntaxSlot::Identifier => "identifier",
        }
    }
}

/// Workbench elements whose colors are set directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum OverrideSlot {
    TitleBarBackground,
    TitleBarForeground,
    StatusBarBackground,
    StatusBarForeground,
}

impl OverrideSlot {
    pub const ALL: [OverrideSlot; 4] = [
        OverrideSlot::TitleBarBackground,
        OverrideSlot::TitleBarForeground,
        OverrideSlot::StatusBarBackground,
        OverrideSlot::StatusBarForeground,
    ];

    /// Workbench color customization key.
    pub fn key(self) -> &'static str {
        match self {
            OverrideSlot::TitleBarBackground => "titleBar.activeBackground",
            OverrideSlot::TitleBarForeground => "titleBar.activeForeground",
            OverrideSlot::StatusBarBackground => "statusBar.background",
            OverrideSlot::StatusBarForeground => "statusBar.foreground",
        }
    }
}

/// Any color slot of a theme document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Slot {
    Base(BaseSlot),
    Syntax(SyntaxSlot),
    Override(OverrideSlot),
}

impl Slot {
    /// Every slot in document order.
    pub fn all() -> impl Iterator<Item = Slot> {
        BaseSlot::ALL
            .into_iter()
            .map(Slot::Base)
            .chain(SyntaxSlot::ALL.into_iter().map(Slot::Syntax))
            .chain(OverrideSlot::ALL.into_iter().map(Slot::Override))
    }
}

/// The theme recipe: which color fills each slot.
pub fn recipe(slot: Slot) -> Source {
    use Source::{Fixed, Palette as P};

    match slot {
        Slot::Base(base) => match base {
            BaseSlot::Background => Fixed(BLACK.mid),
            BaseSlot::Foreground => Fixed(WHITE.mid),
            BaseSlot::Color1 => P(Role::Rich),
            BaseSlot::Color2 => P(Role::Dull),
            BaseSlot::Color3 => P(Role::Light),
            BaseSlot::Color4 => P(Role::Mid),
        },
        Slot::Syntax(syntax) => match syntax {
            SyntaxSlot::CssClass
            | SyntaxSlot::CssId
            | SyntaxSlot::CssTag
            | SyntaxSlot::Keyword
            | SyntaxSlot::Function
            | SyntaxSlot::FunctionCall
            | SyntaxSlot::Modifier => P(Role::Mid),
            SyntaxSlot::Number | SyntaxSlot::Storage => P(Role::Rich),
            SyntaxSlot::Comment | SyntaxSlot::Type => P(Role::Dark),
            SyntaxSlot::String => P(Role::Light),
            SyntaxSlot::Identifier => P(Role::Dull),
        },
        Slot::Override(over) => match over {
            OverrideSlot::TitleBarBackground | OverrideSlot::StatusBarBackground => {
                P(Role::DeepAccent)
            }
            OverrideSlot::TitleBarForeground | OverrideSlot::StatusBarForeground => {
                Fixed(WHITE.light)
            }
        },
    }
}

/// Editor background, foreground and four accents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BaseColors {
    pub background: Color,
    pub foreground: Color,
    pub color1: Color,
    pub color2: Color,
    pub color3: Color,
    pub color4: Color,
}

/// One color per lexical category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyntaxColors {
    pub css_class: Color,
    pub css_id: Color,
    pub css_tag: Color,
    pub number: Color,
    pub comment: Color,
    pub keyword: Color,
    pub string: Color,
    #[serde(rename = "type")]
    pub type_: Color,
    pub storage: Color,
    pub function: Color,
    pub function_call: Color,
    pub modifier: Color,
    pub identifier: Color,
}

/// A fully expanded theme, before rendering to the editor format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeDocument {
    /// Display label
    pub name: String,
    pub base: BaseColors,
    pub syntax: SyntaxColors,
    /// Workbench color customizations keyed by element, one per
    /// [`OverrideSlot`]. Private so a document can only come from [`expand`].
    overrides: BTreeMap<String, Color>,
}

impl ThemeDocument {
    /// Workbench color customizations keyed by element.
    pub fn overrides(&self) -> &BTreeMap<String, Color> {
        &self.overrides
    }

    /// Color currently held by a slot.
    pub fn get(&self, slot: Slot) -> &Color {
        match slot {
            Slot::Base(base) => match base {
                BaseSlot::Background => &self.base.background,
                BaseSlot::Foreground => &self.base.foreground,
                BaseSlot::Color1 => &self.base.color1,
                BaseSlot::Color2 => &self.base.color2,
                BaseSlot::Color3 => &self.base.color3,
                BaseSlot::Color4 => &self.base.color4,
            },
            Slot::Syntax(syntax) => self.syntax_color(syntax),
            Slot::Override(over) => &self.overrides[over.key()],
        }
    }

    pub fn syntax_color(&self, slot: SyntaxSlot) -> &Color {
        let s = &self.syntax;
        match slot {
            SyntaxSlot::CssClass => &s.css_class,
            SyntaxSlot::CssId => &s.css_id,
            SyntaxSlot::CssTag => &s.css_tag,
            SyntaxSlot::Number => &s.number,
            SyntaxSlot::Comment => &s.comment,
            SyntaxSlot::Keyword => &s.keyword,
            SyntaxSlot::String => &s.string,
            SyntaxSlot::Type => &s.type_,
            SyntaxSlot::Storage => &s.storage,
            SyntaxSlot::Function => &s.function,
            SyntaxSlot::FunctionCall => &s.function_call,
            SyntaxSlot::Modifier => &s.modifier,
            SyntaxSlot::Identifier => &s.identifier,
        }
    }
}

/// Expand a palette into a complete theme document.
pub fn expand(palette: &Palette, label_prefix: &str) -> ThemeDocument {
    let base = |slot| recipe(Slot::Base(slot)).resolve(palette);
    let syntax = |slot| recipe(Slot::Syntax(slot)).resolve(palette);

    let overrides = OverrideSlot::ALL
        .into_iter()
        .map(|slot| {
            let color = recipe(Slot::Override(slot)).resolve(palette);
            (slot.key().to_string(), color)
        })
        .collect();

    ThemeDocument {
        name: naming::label(label_prefix, &palette.name),
        base: BaseColors {
            background: base(BaseSlot::Background),
            foreground: base(BaseSlot::Foreground),
            color1: base(BaseSlot::Color1),
            color2: base(BaseSlot::Color2),
            color3: base(BaseSlot::Color3),
            color4: base(BaseSlot::Color4),
        },
        syntax: SyntaxColors {
            css_class: syntax(SyntaxSlot::CssClass),
            css_id: syntax(SyntaxSlot::CssId),
            css_tag: syntax(SyntaxSlot::CssTag),
            number: syntax(SyntaxSlot::Number),
            comment: syntax(SyntaxSlot::Comment),
            keyword: syntax(SyntaxSlot::Keyword),
            string: syntax(SyntaxSlot::String),
            type_: syntax(SyntaxSlot::Type),
            storage: syntax(SyntaxSlot::Storage),
            function: syntax(SyntaxSlot::Function),
            function_call: syntax(SyntaxSlot::FunctionCall),
            modifier: syntax(SyntaxSlot::Modifier),
            identifier: syntax(SyntaxSlot::Identifier),
        },
        overrides,
    }
}
