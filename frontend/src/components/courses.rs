use yew::prelude::*;

use crate::components::navigation::{Destination, NavAction, NavStrategy};
use crate::content::{Course, COURSES};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct CourseCardProps {
    pub course: Course,
    pub strategy: NavStrategy,
}

#[function_component(CourseCard)]
pub fn course_card(props: &CourseCardProps) -> Html {
    let course = props.course;
    html! {
        <div class="course-card">
            <div class="course-header">
                <h3>{course.title}</h3>
                <span class={classes!("level-badge", course.level.badge_class())}>
                    {course.level.label()}
                </span>
            </div>
            <div class="course-meta">
                <span>{format!("📅 {}", course.duration)}</span>
                <span>{format!("🛠️ {} Projects", course.project_count)}</span>
            </div>
            <div class="course-topics">
                <h4>{"What You'll Learn:"}</h4>
                <ul>
                    { for course.topics.iter().map(|topic| html! { <li key={*topic}>{*topic}</li> }) }
                </ul>
            </div>
            <NavAction
                to={Destination::Route(Route::Register)}
                strategy={props.strategy}
                classes="btn btn-outline course-cta"
            >
                {"Enroll Now"}
            </NavAction>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CoursesProps {
    pub strategy: NavStrategy,
}

#[function_component(Courses)]
pub fn courses(props: &CoursesProps) -> Html {
    html! {
        <section id="courses" class="courses">
            <div class="container">
                <div class="section-header">
                    <h2>{"Our Courses"}</h2>
                    <p>{"Structured learning paths with increasing complexity"}</p>
                </div>
                <div class="courses-grid">
                    {
                        for COURSES.iter().map(|course| html! {
                            <CourseCard key={course.title} course={*course} strategy={props.strategy} />
                        })
                    }
                </div>
            </div>
        </section>
    }
}
