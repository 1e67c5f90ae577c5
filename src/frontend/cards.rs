use yew::prelude::*;

use crate::content::{Icon, Project};
use crate::style;

#[derive(Properties, PartialEq)]
pub struct SkillCardProps {
    pub icon: Icon,
    pub name: AttrValue,
}

#[function_component(SkillCard)]
pub fn skill_card(props: &SkillCardProps) -> Html {
    html! {
        <div class="skill-card" style={style::SKILL_CARD}>
            <div style={style::SKILL_ICON}>
                <i class={props.icon.class()} aria-hidden="true"></i>
            </div>
            <p>{props.name.clone()}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectCardProps {
    pub project: Project,
}

#[function_component(ProjectCard)]
pub fn project_card(props: &ProjectCardProps) -> Html {
    let project = &props.project;

    html! {
        <div class="project-card" style={style::PROJECT_CARD}>
            <h3>{project.title}</h3>
            <p>{project.description}</p>
            <div style={style::PROJECT_ACTIONS}>
                { for project.actions().into_iter().map(|action| html! {
                    <a
                        class={action.kind.class()}
                        href={action.href}
                        target="_blank"
                        rel="noopener noreferrer"
                        style={style::BUTTON}
                    >
                        if let Some(icon) = action.icon {
                            <i class={icon.class()} aria-hidden="true"></i>
                            {" "}
                        }
                        {action.label}
                    </a>
                }) }
            </div>
        </div>
    }
}
