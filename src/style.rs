//! Inline style tables. Theme-dependent styles are built per render from the
//! active [`Palette`]; everything else is a literal.

use crate::theme::Palette;

const NAV_PADDING: &str = "18px 30px";
const NAV_PADDING_SCROLLED: &str = "10px 60px";

pub const NAV_LINKS: &str =
    "display: flex; gap: 20px; align-items: center; flex-wrap: wrap;";
pub const LINK: &str = "text-decoration: none; color: inherit;";
pub const TOGGLE_BUTTON: &str = "padding: 6px 10px; border-radius: 8px; \
    border: 1px solid rgba(255,255,255,0.2); cursor: pointer; \
    background: transparent; color: inherit;";
pub const LOGO: &str = "font-size: 22px; font-weight: bold;";
pub const LOGO_ACCENT: &str = "color: #38bdf8;";

pub const HERO_CARD: &str = "background: rgba(255,255,255,0.08); padding: 30px 20px; \
    border-radius: 20px; text-align: center; max-width: 400px; width: 90%; position: relative;";
pub const HERO_NAME: &str = "font-size: clamp(26px, 5vw, 40px);";
pub const HERO_HEADLINE: &str = "color: #38bdf8; min-height: 1.2em;";
pub const HERO_TEXT: &str = "margin: 15px auto;";
pub const HERO_ACTIONS: &str = "margin-top: 20px;";
pub const PROFILE_IMAGE: &str =
    "width: 120px; border-radius: 50%; margin-bottom: 15px; border: 4px solid #38bdf8;";
pub const CIRCLE_ONE: &str = "position: absolute; width: 300px; height: 300px; \
    background: #3b82f6; opacity: 0.2; border-radius: 50%; top: -80px; left: -80px;";
pub const CIRCLE_TWO: &str = "position: absolute; width: 250px; height: 250px; \
    background: #22c55e; opacity: 0.2; border-radius: 50%; bottom: -80px; right: -80px;";

pub const SKILL_GRID: &str =
    "display: flex; justify-content: center; gap: 20px; flex-wrap: wrap; padding: 0 20px;";
pub const SKILL_CARD: &str =
    "background: rgba(255,255,255,0.08); padding: 15px 25px; border-radius: 12px;";
pub const SKILL_ICON: &str = "font-size: 26px;";
pub const PROJECT_GRID: &str =
    "display: flex; justify-content: center; gap: 25px; flex-wrap: wrap; padding: 0 20px;";
pub const PROJECT_CARD: &str =
    "background: rgba(255,255,255,0.08); padding: 25px; border-radius: 14px; width: 270px;";
pub const PROJECT_ACTIONS: &str =
    "margin-top: 15px; display: flex; gap: 10px; justify-content: center;";
pub const BUTTON: &str = "background: #3b82f6; color: white; padding: 10px 20px; \
    margin: 5px; border-radius: 8px; text-decoration: none;";

pub const FOOTER_CONTENT: &str = "max-width: 600px; margin: auto;";
pub const SOCIALS: &str = "display: flex; justify-content: center; gap: 20px; margin: 15px 0;";
pub const SOCIAL_ICON: &str = "color: #38bdf8; font-size: 22px;";
pub const COPYRIGHT: &str = "font-size: 14px; color: #94a3b8;";

/// Hover emphasis, hero entrance and the typing caret need pseudo-classes and
/// keyframes, which inline styles cannot express.
pub const STYLESHEET: &str = "\
html { scroll-behavior: smooth; }
body { margin: 0; }
.skill-card, .project-card { transition: transform 0.2s ease; }
.skill-card:hover { transform: scale(1.1); }
.project-card:hover { transform: scale(1.05); }
.hero-card { animation: hero-rise 0.6s ease-out both; }
@keyframes hero-rise {
  from { opacity: 0; transform: translateY(40px); }
  to { opacity: 1; transform: translateY(0); }
}
.typewriter::after { content: '|'; margin-left: 2px; animation: caret 1s step-end infinite; }
@keyframes caret { 50% { opacity: 0; } }
@media (prefers-reduced-motion: reduce) {
  .hero-card, .typewriter::after { animation: none; }
  .skill-card, .project-card { transition: none; }
}
";

pub fn container(palette: &Palette) -> String {
    format!(
        "font-family: Arial, sans-serif; min-height: 100vh; transition: all 0.3s ease; \
         background: {}; color: {};",
        palette.background, palette.text
    )
}

pub fn nav(palette: &Palette, scrolled: bool) -> String {
    let padding = if scrolled {
        NAV_PADDING_SCROLLED
    } else {
        NAV_PADDING
    };
    format!(
        "display: flex; justify-content: space-between; align-items: center; \
         padding: {padding}; position: sticky; top: 0; z-index: 1000; \
         backdrop-filter: blur(14px); flex-wrap: wrap; transition: padding 0.3s ease; \
         background: {};",
        palette.nav_background
    )
}

pub fn hero(palette: &Palette) -> String {
    format!(
        "display: flex; justify-content: center; align-items: center; min-height: 100vh; \
         padding: 40px 20px; position: relative; overflow: hidden; color: {};",
        palette.text
    )
}

pub fn section(palette: &Palette) -> String {
    format!("padding: 80px 20px; text-align: center; color: {};", palette.text)
}

pub fn footer(palette: &Palette) -> String {
    format!(
        "background: {}; color: {}; padding: 60px 20px; text-align: center;",
        palette.footer_background, palette.footer_text
    )
}
