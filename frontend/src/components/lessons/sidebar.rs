//! Lesson list sidebar: a pure projection of the fetched list with the
//! current lesson highlighted. Selection goes back to the watch controller
//! through `on_select`; this component holds no state of its own.

use common::model::lesson::Lesson;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SidebarProps {
    pub lessons: Vec<Lesson>,
    #[prop_or_default]
    pub current_lesson_id: Option<u64>,
    pub on_select: Callback<u64>,
}

pub struct LessonSidebar;

impl Component for LessonSidebar {
    type Message = ();
    type Properties = SidebarProps;

    fn create(_ctx: &Context<Self>) -> Self {
        LessonSidebar
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        html! {
            <aside class="lesson-sidebar">
                <h2 class="lesson-sidebar-heading">{"Episodes"}</h2>
                <ul class="lesson-list">
                    { for props.lessons.iter().map(|lesson| view_entry(lesson, props)) }
                </ul>
            </aside>
        }
    }
}

fn view_entry(lesson: &Lesson, props: &SidebarProps) -> Html {
    let id = lesson.id;
    let onclick = props.on_select.reform(move |_: MouseEvent| id);
    let class = if props.current_lesson_id == Some(id) {
        "lesson-entry lesson-entry-current"
    } else {
        "lesson-entry"
    };
    html! {
        <li key={id.to_string()} class={class}>
            <button {onclick}>
                <span class="lesson-entry-title">{ lesson.title.clone() }</span>
                {
                    if lesson.is_free {
                        html! { <span class="lesson-badge">{"Free"}</span> }
                    } else {
                        Html::default()
                    }
                }
            </button>
        </li>
    }
}
