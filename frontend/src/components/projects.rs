use log::debug;
use yew::prelude::*;

use crate::config::site_config;
use crate::content::{categories, filter_projects, visible_tags, Project, PLACEHOLDER_IMAGE, PROJECTS};
use crate::reveal::binding::{bind, Entrance};
use crate::reveal::evaluator::{Extent, RevealPolicy};
use crate::reveal::hooks::use_reveal;
use crate::reveal::layout::TargetId;
use crate::reveal::store::Rearm;

const MAX_TAGS: usize = 3;

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    project: &'static Project,
    target_ref: NodeRef,
    style: String,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let project = props.project;
    let image = if project.image.is_empty() {
        PLACEHOLDER_IMAGE
    } else {
        project.image
    };
    let (tags, hidden_tags) = visible_tags(project.technologies, MAX_TAGS);

    html! {
        <div ref={props.target_ref.clone()} class="project" style={props.style.clone()}>
            <div class="project-card">
                <div class="project-image" style={format!("background-image: url('{}');", image)}></div>
                <div class="project-shade"></div>
                <div class="project-details">
                    <span class="project-category">{project.category}</span>
                    <h3>{project.title}</h3>
                    <p>{project.description}</p>
                    <div class="project-tags">
                        { for tags.iter().map(|tech| html! { <span key={*tech} class="tag">{*tech}</span> }) }
                        {
                            if hidden_tags > 0 {
                                html! { <span class="tag more">{format!("+{}", hidden_tags)}</span> }
                            } else {
                                html! {}
                            }
                        }
                    </div>
                    {
                        if let Some(url) = project.live_url {
                            html! {
                                <a href={url} target="_blank" rel="noopener noreferrer" class="project-link">
                                    {"Live Demo ↗"}
                                </a>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>
            </div>
        </div>
    }
}

#[function_component(ProjectsSection)]
pub fn projects_section() -> Html {
    let config = site_config();
    let active_category = use_state(|| None::<&'static str>);

    let heading = use_reveal(
        vec![TargetId(0)],
        RevealPolicy::absolute(config.heading_margin_px)
            .read_at(Extent::Viewports(config.reading_line_vh)),
        Rearm::Never,
    );

    let visible = filter_projects(PROJECTS, *active_category);
    let ids: Vec<TargetId> = visible.iter().copied().map(TargetId).collect();
    let grid = use_reveal(
        ids,
        RevealPolicy::absolute(config.project_margin_px)
            .read_at(Extent::Viewports(config.reading_line_vh)),
        Rearm::OnScrollUp {
            slack_px: config.rearm_slack_px,
        },
    );

    let select_category = |category: Option<&'static str>| {
        let active_category = active_category.clone();
        Callback::from(move |_: MouseEvent| {
            debug!("Project filter: {}", category.unwrap_or("All"));
            active_category.set(category);
        })
    };

    let chip = |label: &'static str, category: Option<&'static str>| {
        let active = *active_category == category;
        html! {
            <button
                key={label}
                class={classes!("filter-chip", active.then(|| "active"))}
                onclick={select_category(category)}
            >
                {label}
            </button>
        }
    };

    let heading_style = bind(&Entrance::HEADING, heading.is_revealed(TargetId(0)), 0).to_css();

    html! {
        <section class="projects-section">
            <style>
                {r#"
                .projects-section {
                    position: relative;
                    min-height: 100vh;
                    overflow: hidden;
                    padding: 5rem 1.5rem;
                    background: linear-gradient(180deg, #6999c0 0%, #a48de2 100%);
                }
                .projects-content {
                    position: relative;
                    z-index: 10;
                    max-width: 72rem;
                    margin: 0 auto;
                }
                .projects-header {
                    text-align: center;
                    margin-bottom: 3rem;
                }
                .projects-header h2 {
                    font-size: clamp(3rem, 8vw, 4.5rem);
                    font-weight: 700;
                    color: #fff;
                    margin-bottom: 1rem;
                }
                .projects-header p {
                    max-width: 42rem;
                    margin: 0 auto;
                    font-size: 1.25rem;
                    line-height: 1.6;
                    color: rgba(255, 255, 255, 0.8);
                }
                .project-filters {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 0.5rem;
                    margin-bottom: 2rem;
                }
                .filter-chip {
                    padding: 0.5rem 1rem;
                    border-radius: 9999px;
                    font-size: 0.875rem;
                    color: rgba(255, 255, 255, 0.8);
                    background: rgba(255, 255, 255, 0.1);
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    cursor: pointer;
                    transition: all 0.3s;
                }
                .filter-chip.active {
                    color: #fff;
                    background: rgba(255, 255, 255, 0.3);
                    border-color: rgba(255, 255, 255, 0.4);
                }
                .project-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(18rem, 1fr));
                    gap: 1.5rem;
                }
                .project-card {
                    position: relative;
                    height: 32rem;
                    border-radius: 1rem;
                    overflow: hidden;
                    cursor: pointer;
                }
                .project-image {
                    position: absolute;
                    inset: 0;
                    background-size: cover;
                    background-position: center;
                    transition: transform 0.5s;
                }
                .project-card:hover .project-image {
                    transform: scale(1.1);
                }
                .project-shade,
                .project-details {
                    position: absolute;
                    inset: 0;
                    opacity: 0;
                    transition: opacity 0.3s;
                }
                .project-shade {
                    background: rgba(0, 0, 0, 0.6);
                }
                .project-details {
                    display: flex;
                    flex-direction: column;
                    justify-content: flex-end;
                    padding: 2rem;
                    color: #fff;
                }
                .project-card:hover .project-shade,
                .project-card:hover .project-details {
                    opacity: 1;
                }
                .project-category {
                    font-size: 0.75rem;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    color: rgba(255, 255, 255, 0.7);
                }
                .project-tags {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                    margin: 1rem 0;
                }
                .tag {
                    padding: 0.25rem 0.5rem;
                    font-size: 0.75rem;
                    border-radius: 9999px;
                    background: rgba(255, 255, 255, 0.2);
                    border: 1px solid rgba(255, 255, 255, 0.2);
                }
                .tag.more {
                    background: none;
                    border: none;
                    color: rgba(255, 255, 255, 0.6);
                }
                .project-link {
                    align-self: flex-start;
                    padding: 0.5rem 0.75rem;
                    border-radius: 0.5rem;
                    color: #fff;
                    text-decoration: none;
                    background: rgba(255, 255, 255, 0.2);
                    border: 1px solid rgba(255, 255, 255, 0.3);
                }
                .projects-empty {
                    text-align: center;
                    padding: 3rem 0;
                    font-size: 1.125rem;
                    color: rgba(255, 255, 255, 0.6);
                }
                "#}
            </style>
            <div class="projects-content">
                <div ref={heading.node_ref(TargetId(0))} class="projects-header" style={heading_style}>
                    <h2>{"Projekti"}</h2>
                    <p>{"Evo nekih od naših najnovijih radova. Svaki projekat je priča o saradnji, kreativnosti i rezultatima."}</p>
                </div>

                <div class="project-filters">
                    { chip("All", None) }
                    { for categories(PROJECTS).into_iter().map(|category| chip(category, Some(category))) }
                </div>

                <div class="project-grid">
                    {
                        visible.iter().map(|&index| {
                            let id = TargetId(index);
                            let project = &PROJECTS[index];
                            html! {
                                <ProjectCard
                                    key={project.title}
                                    {project}
                                    target_ref={grid.node_ref(id)}
                                    style={bind(&Entrance::PROJECT, grid.is_revealed(id), index).to_css()}
                                />
                            }
                        }).collect::<Html>()
                    }
                </div>

                {
                    if visible.is_empty() {
                        html! { <p class="projects-empty">{"Nema projekata u ovoj kategoriji."}</p> }
                    } else {
                        html! {}
                    }
                }
            </div>
        </section>
    }
}
