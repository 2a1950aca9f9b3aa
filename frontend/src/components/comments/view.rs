//! View rendering for the comment thread.

use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

use common::model::comment::Comment;

use super::{CommentThread, Msg, Phase};

pub(super) fn view(thread: &CommentThread, ctx: &Context<CommentThread>) -> Html {
    html! {
        <section class="comment-thread">
            <h2 class="comment-heading">{"Comments"}</h2>
            { draft_form(thread, ctx) }
            {
                match &thread.operation_error {
                    Some(message) => html! {
                        <p class="comment-error">{ message.clone() }</p>
                    },
                    None => Html::default(),
                }
            }
            { thread_body(thread, ctx) }
        </section>
    }
}

fn draft_form(thread: &CommentThread, ctx: &Context<CommentThread>) -> Html {
    let oninput = ctx.link().callback(|e: InputEvent| {
        let value = e.target_unchecked_into::<HtmlTextAreaElement>().value();
        Msg::UpdateDraft(value)
    });
    let onclick = ctx.link().callback(|_: MouseEvent| Msg::Submit);
    html! {
        <div class="comment-form">
            <textarea
                class="comment-draft"
                placeholder="Write a comment..."
                value={thread.draft.clone()}
                {oninput}
            />
            <button class="comment-submit" disabled={thread.submitting} {onclick}>
                { if thread.submitting { "Posting..." } else { "Post" } }
            </button>
        </div>
    }
}

fn thread_body(thread: &CommentThread, ctx: &Context<CommentThread>) -> Html {
    match &thread.phase {
        Phase::Loading => html! { <p class="comment-status">{"Loading comments..."}</p> },
        Phase::Error(message) => html! {
            <p class="comment-status comment-error">{ message.clone() }</p>
        },
        Phase::Ready if thread.comments.is_empty() => html! {
            <p class="comment-status">{"No comments yet."}</p>
        },
        Phase::Ready => html! {
            <ul class="comment-list">
                { for thread.comments.iter().map(|comment| view_comment(comment, ctx)) }
            </ul>
        },
    }
}

fn view_comment(comment: &Comment, ctx: &Context<CommentThread>) -> Html {
    let comment_id = comment.id;
    let onclick = ctx.link().callback(move |_: MouseEvent| Msg::Delete(comment_id));
    let author = comment
        .author
        .clone()
        .unwrap_or_else(|| "Anonymous".to_string());
    html! {
        <li key={comment.id.to_string()} class="comment-item">
            <div class="comment-meta">
                <span class="comment-author">{ author }</span>
                <span class="comment-date">
                    { comment.created_at.clone().unwrap_or_default() }
                </span>
                <button class="comment-delete" title="Delete comment" {onclick}>
                    {"\u{2715}"}
                </button>
            </div>
            <p class="comment-content">{ comment.content.clone() }</p>
        </li>
    }
}
