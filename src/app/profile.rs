use leptos::prelude::*;

use crate::cv::{Experience as Role, Project, Skill, CV};

#[component]
pub fn SocialLinks(#[prop(default = "text-2xl")] size: &'static str) -> impl IntoView {
    view! {
        <div class={format!("flex justify-center gap-4 {size}")}>
            {CV
                .social
                .iter()
                .map(|link| {
                    view! {
                        <a
                            href=link.url
                            target="_blank"
                            rel="noopener noreferrer"
                            title=link.platform
                            aria-label={format!("{} Profile", link.platform)}
                        >
                            <i class={link.icon.class()}></i>
                        </a>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn About() -> impl IntoView {
    let personal = CV.personal;
    view! {
        <section id="about" class="max-w-3xl mx-auto my-12">
            <h2 class="text-2xl font-bold my-6 text-center">"About Me"</h2>
            <p class="text-center font-bold mb-4">{personal.title}</p>
            <p class="text-base mb-4 leading-relaxed">{personal.bio}</p>
            <div class="flex justify-center items-center gap-x-1.5 mb-4 text-muted">
                <i class="extra-location"></i>
                <div>{personal.location}</div>
            </div>
            <SocialLinks />
        </section>
    }
}

#[component]
fn SkillBar(skill: Skill) -> impl IntoView {
    view! {
        <div class="space-y-1">
            <div class="flex justify-between text-sm">
                <span>{skill.name}</span>
                <span class="text-muted">{format!("{}%", skill.level)}</span>
            </div>
            <div class="h-2 rounded-full bg-brightBlack/50">
                <div
                    class="h-2 rounded-full bg-purple"
                    style={format!("width: {}%", skill.level.min(100))}
                ></div>
            </div>
        </div>
    }
}

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="w-full max-w-4xl mx-auto my-12">
            <h2 class="text-2xl font-bold my-6 text-center">"Skills"</h2>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                {CV
                    .skill_groups()
                    .into_iter()
                    .map(|(category, skills)| {
                        view! {
                            <div class="p-4 rounded-lg bg-brightBlack/30 border border-muted/30">
                                <h3 class="mb-2 border-b pb-0.5 font-bold">{category.label()}</h3>
                                <div class="grid gap-y-3">
                                    {skills
                                        .into_iter()
                                        .map(|skill| view! { <SkillBar skill /> })
                                        .collect_view()}
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    view! {
        <div class="flex flex-col gap-2 p-4 rounded-lg bg-brightBlack/30 border border-muted/30">
            <div class="flex items-start justify-between">
                <div class="text-left">
                    <h3 class="font-bold text-lg">{project.title}</h3>
                    <div class="text-sm text-muted">{project.category.label()}</div>
                </div>
                {project
                    .featured
                    .then(|| {
                        view! {
                            <span class="shrink-0 px-2 py-0.5 rounded-full text-xs text-yellow border border-yellow/30 bg-yellow/10">
                                "⭐ Featured"
                            </span>
                        }
                    })}
            </div>
            <p class="font-medium">{project.description}</p>
            <p class="text-sm leading-relaxed">{project.long_description}</p>
            <div class="flex flex-wrap gap-2 mt-auto">
                {project
                    .technologies
                    .iter()
                    .map(|tech| {
                        view! {
                            <span class="px-2 py-0.5 rounded-md text-xs text-cyan bg-cyan/10 border border-cyan/30">
                                {*tech}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id="projects" class="w-full max-w-5xl mx-auto my-12">
            <h2 class="text-2xl font-bold my-6 text-center">"Projects"</h2>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4">
                {CV
                    .projects_by_prominence()
                    .into_iter()
                    .map(|project| view! { <ProjectCard project /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn RoleEntry(role: Role) -> impl IntoView {
    view! {
        <div class="space-y-2 pl-4 border-l-2 border-purple/50">
            <div class="flex items-start justify-between">
                <div class="text-left">
                    <h4 class="font-bold">{role.company}</h4>
                    <strong>{role.role}</strong>
                </div>
                <div class="shrink-0 text-right">
                    <div class="font-bold">{role.period()}</div>
                </div>
            </div>
            <p>{role.description}</p>
            <ul class="list-disc list-inside text-sm space-y-1">
                {role
                    .achievements
                    .iter()
                    .map(|achievement| view! { <li>{*achievement}</li> })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
pub fn Experience() -> impl IntoView {
    view! {
        <section id="experience" class="w-full max-w-3xl mx-auto my-12">
            <h2 class="text-2xl font-bold my-6 text-center">"Experience"</h2>
            <div class="grid gap-y-6">
                {CV
                    .experience
                    .iter()
                    .map(|role| view! { <RoleEntry role={*role} /> })
                    .collect_view()}
            </div>
        </section>
    }
}
