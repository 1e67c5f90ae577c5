use yew::prelude::*;

use super::cards::{ProjectCard, SkillCard};
use super::headline::Headline;
use crate::content::{Icon, Section, NAV_SECTIONS, OWNER, PROJECTS, SKILLS, SOCIALS};
use crate::style;
use crate::theme::{Palette, Theme};

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub theme: Theme,
    pub scrolled: bool,
    pub on_toggle: Callback<MouseEvent>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let theme = props.theme;

    html! {
        <nav style={style::nav(&theme.palette(), props.scrolled)}>
            <h2 style={style::LOGO}>
                {OWNER.brand}
                <span style={style::LOGO_ACCENT}>{OWNER.brand_accent}</span>
            </h2>
            <div style={style::NAV_LINKS}>
                { for NAV_SECTIONS.iter().map(|section| html! {
                    <a href={section.href()} style={style::LINK}>{section.title()}</a>
                }) }
                <button
                    type="button"
                    style={style::TOGGLE_BUTTON}
                    aria-label={theme.toggle_label()}
                    aria-pressed={theme.pressed().to_string()}
                    onclick={props.on_toggle.clone()}
                >
                    {theme.icon()}
                </button>
            </div>
        </nav>
    }
}

/// Every section below the navbar renders against the active palette.
#[derive(Properties, PartialEq)]
pub struct SectionProps {
    pub palette: Palette,
}

#[function_component(Hero)]
pub fn hero(props: &SectionProps) -> Html {
    html! {
        <section style={style::hero(&props.palette)}>
            <div style={style::CIRCLE_ONE}></div>
            <div style={style::CIRCLE_TWO}></div>
            <div class="hero-card" style={style::HERO_CARD}>
                <img src={OWNER.photo} alt="profile" style={style::PROFILE_IMAGE} />
                <h1 style={style::HERO_NAME}>{OWNER.name}</h1>
                <Headline />
                <p style={style::HERO_TEXT}>{OWNER.summary}</p>
                <div style={style::HERO_ACTIONS}>
                    <a href={OWNER.resume} style={style::BUTTON}>
                        <i class={Icon::Download.class()} aria-hidden="true"></i>
                        {" Resume"}
                    </a>
                </div>
            </div>
        </section>
    }
}

#[function_component(Skills)]
pub fn skills(props: &SectionProps) -> Html {
    html! {
        <section id={Section::Skills.id()} style={style::section(&props.palette)}>
            <h2>{Section::Skills.title()}</h2>
            <div style={style::SKILL_GRID}>
                { for SKILLS.iter().map(|skill| html! {
                    <SkillCard icon={skill.icon} name={skill.name} />
                }) }
            </div>
        </section>
    }
}

#[function_component(Projects)]
pub fn projects(props: &SectionProps) -> Html {
    html! {
        <section id={Section::Projects.id()} style={style::section(&props.palette)}>
            <h2>{Section::Projects.title()}</h2>
            <div style={style::PROJECT_GRID}>
                { for PROJECTS.iter().map(|project| html! {
                    <ProjectCard project={*project} />
                }) }
            </div>
        </section>
    }
}

#[function_component(Contact)]
pub fn contact(props: &SectionProps) -> Html {
    html! {
        <section id={Section::Contact.id()} style={style::section(&props.palette)}>
            <h2>{Section::Contact.title()}</h2>
            <p>{format!("📧 {}", OWNER.email)}</p>
            <p>{format!("📞 {}", OWNER.phone)}</p>
        </section>
    }
}

#[function_component(Footer)]
pub fn footer(props: &SectionProps) -> Html {
    html! {
        <footer id={Section::Footer.id()} style={style::footer(&props.palette)}>
            <div style={style::FOOTER_CONTENT}>
                <h3>{OWNER.name}</h3>
                <p>{OWNER.tagline}</p>
                <div style={style::SOCIALS}>
                    { for SOCIALS.iter().map(|social| html! {
                        <a
                            href={social.href}
                            target="_blank"
                            rel="noopener noreferrer"
                            aria-label={social.label}
                            style={style::SOCIAL_ICON}
                        >
                            <i class={social.icon.class()} aria-hidden="true"></i>
                        </a>
                    }) }
                </div>
                <p style={style::COPYRIGHT}>{OWNER.copyright()}</p>
            </div>
        </footer>
    }
}
