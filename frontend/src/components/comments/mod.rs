//! Comment thread, scoped to a single lesson.
//!
//! Prop-driven: the thread re-fetches whenever `lesson_id` changes. List
//! updates after create/delete are applied locally from the server's
//! response rather than by re-fetching, which keeps a successful operation
//! visible immediately. All completions are generation-guarded the same way
//! the watch controller's are, so a thread remounted onto another lesson
//! never shows a predecessor's comments.

use common::model::comment::Comment;
use common::requests::CreateCommentRequest;
use yew::context::ContextHandle;
use yew::platform::spawn_local;
use yew::prelude::*;

mod view;

use crate::api;
use crate::config::{AppConfig, DEFAULT_API_BASE};
use crate::context::AuthCtx;

#[derive(Properties, PartialEq, Clone)]
pub struct CommentThreadProps {
    pub lesson_id: u64,
}

pub enum Msg {
    Loaded { epoch: u64, comments: Vec<Comment> },
    LoadFailed { epoch: u64, message: String },
    UpdateDraft(String),
    Submit,
    Created { epoch: u64, comment: Comment },
    Delete(u64),
    Deleted { epoch: u64, comment_id: u64 },
    OperationFailed { epoch: u64, message: String },
    AuthChanged(AuthCtx),
}

pub enum Phase {
    Loading,
    Ready,
    Error(String),
}

pub struct CommentThread {
    phase: Phase,
    comments: Vec<Comment>,
    draft: String,
    submitting: bool,
    /// Failure of the last create/delete, shown as a banner above the list.
    operation_error: Option<String>,
    epoch: u64,
    auth: AuthCtx,
    config: AppConfig,
    _auth_handle: Option<ContextHandle<AuthCtx>>,
}

impl Component for CommentThread {
    type Message = Msg;
    type Properties = CommentThreadProps;

    fn create(ctx: &Context<Self>) -> Self {
        let (auth, auth_handle) = ctx
            .link()
            .context::<AuthCtx>(ctx.link().callback(Msg::AuthChanged))
            .unzip();
        let config = ctx
            .link()
            .context::<AppConfig>(Callback::noop())
            .map(|(config, _)| config)
            .unwrap_or_else(|| AppConfig {
                api_base: DEFAULT_API_BASE.to_string(),
            });
        let mut thread = CommentThread {
            phase: Phase::Loading,
            comments: Vec::new(),
            draft: String::new(),
            submitting: false,
            operation_error: None,
            epoch: 0,
            auth: auth.unwrap_or_default(),
            config,
            _auth_handle: auth_handle,
        };
        start_load(&mut thread, ctx);
        thread
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded { epoch, comments } => {
                if epoch != self.epoch {
                    return false;
                }
                self.comments = comments;
                self.phase = Phase::Ready;
                true
            }
            Msg::LoadFailed { epoch, message } => {
                if epoch != self.epoch {
                    return false;
                }
                self.phase = Phase::Error(message);
                true
            }
            Msg::UpdateDraft(text) => {
                self.draft = text;
                true
            }
            Msg::Submit => {
                if self.submitting {
                    return false;
                }
                let req = CreateCommentRequest {
                    lesson_id: ctx.props().lesson_id,
                    content: self.draft.trim().to_string(),
                };
                if let Err(err) = api::comments::validate_new_comment(&req) {
                    self.operation_error = Some(err.to_string());
                    return true;
                }
                self.operation_error = None;
                self.submitting = true;

                let epoch = self.epoch;
                let base = self.config.api_base.clone();
                let token = self.auth.token.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    match api::comments::create_comment(&base, &req, token.as_deref()).await {
                        Ok(comment) => link.send_message(Msg::Created { epoch, comment }),
                        Err(err) => {
                            gloo_console::error!(format!("comment creation failed: {}", err));
                            link.send_message(Msg::OperationFailed {
                                epoch,
                                message: err.to_string(),
                            });
                        }
                    }
                });
                true
            }
            Msg::Created { epoch, comment } => {
                if epoch != self.epoch {
                    return false;
                }
                self.submitting = false;
                self.draft.clear();
                push_created(&mut self.comments, comment);
                true
            }
            Msg::Delete(comment_id) => {
                let epoch = self.epoch;
                let base = self.config.api_base.clone();
                let token = self.auth.token.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    match api::comments::delete_comment(&base, comment_id, token.as_deref()).await
                    {
                        Ok(()) => link.send_message(Msg::Deleted { epoch, comment_id }),
                        Err(err) => {
                            gloo_console::error!(format!("comment deletion failed: {}", err));
                            link.send_message(Msg::OperationFailed {
                                epoch,
                                message: err.to_string(),
                            });
                        }
                    }
                });
                false
            }
            Msg::Deleted { epoch, comment_id } => {
                if epoch != self.epoch {
                    return false;
                }
                remove_by_id(&mut self.comments, comment_id);
                true
            }
            Msg::OperationFailed { epoch, message } => {
                if epoch != self.epoch {
                    return false;
                }
                self.submitting = false;
                self.operation_error = Some(message);
                true
            }
            Msg::AuthChanged(auth) => {
                self.auth = auth;
                start_load(self, ctx);
                true
            }
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if old_props.lesson_id != ctx.props().lesson_id {
            self.draft.clear();
            self.operation_error = None;
            start_load(self, ctx);
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}

fn start_load(thread: &mut CommentThread, ctx: &Context<CommentThread>) {
    thread.epoch += 1;
    thread.phase = Phase::Loading;
    thread.comments.clear();
    thread.submitting = false;

    let epoch = thread.epoch;
    let lesson_id = ctx.props().lesson_id;
    let base = thread.config.api_base.clone();
    let token = thread.auth.token.clone();
    let link = ctx.link().clone();
    spawn_local(async move {
        match api::comments::get_lesson_comments(&base, lesson_id, token.as_deref()).await {
            Ok(comments) => link.send_message(Msg::Loaded { epoch, comments }),
            Err(err) => {
                gloo_console::error!(format!("comment list fetch failed: {}", err));
                link.send_message(Msg::LoadFailed {
                    epoch,
                    message: err.to_string(),
                });
            }
        }
    });
}

/// Reflects a successful create. The server may re-send a comment the list
/// already holds (e.g. after a retried submit), so the id is deduplicated.
fn push_created(comments: &mut Vec<Comment>, comment: Comment) {
    comments.retain(|c| c.id != comment.id);
    comments.push(comment);
}

fn remove_by_id(comments: &mut Vec<Comment>, comment_id: u64) {
    comments.retain(|c| c.id != comment_id);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comment(id: u64, content: &str) -> Comment {
        Comment {
            id,
            lesson_id: 1,
            author: Some("dana".into()),
            content: content.into(),
            created_at: None,
        }
    }

    #[test]
    fn created_comment_appears_in_list() {
        let mut comments = vec![comment(1, "first")];
        push_created(&mut comments, comment(2, "second"));
        assert!(comments.iter().any(|c| c.content == "second"));
        assert_eq!(comments.len(), 2);
    }

    #[test]
    fn recreate_with_same_id_does_not_duplicate() {
        let mut comments = vec![comment(1, "first")];
        push_created(&mut comments, comment(1, "first again"));
        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0].content, "first again");
    }

    #[test]
    fn deleted_comment_disappears_from_list() {
        let mut comments = vec![comment(1, "first"), comment(2, "second")];
        remove_by_id(&mut comments, 1);
        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0].id, 2);

        // Deleting an unknown id is a no-op.
        remove_by_id(&mut comments, 99);
        assert_eq!(comments.len(), 1);
    }
}
