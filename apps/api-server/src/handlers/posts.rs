//! Post controller - the CRUD surface for blog posts.

use actix_multipart::Multipart;
use actix_web::{HttpResponse, http::header, web};
use futures::TryStreamExt;
use uuid::Uuid;

use inkwell_core::domain::Post;
use inkwell_core::error::DomainError;
use inkwell_core::validate::{validate_create, validate_update};
use inkwell_shared::ApiResponse;
use inkwell_shared::dto::{EmptyProps, Page, PostDetailProps, PostIndexProps, PostResponse};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Fixed blob-store prefix for featured images.
const FEATURED_IMAGE_PREFIX: &str = "images/posts/featured-images";

/// GET /posts - all posts, most recently updated first.
pub async fn index(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list_recent().await?;

    Ok(HttpResponse::Ok().json(Page::new(
        "Posts/Index",
        PostIndexProps {
            posts: posts.iter().map(to_response).collect(),
        },
    )))
}

/// GET /posts/create - the empty creation form.
pub async fn create() -> AppResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(Page::new("Posts/Create", EmptyProps {})))
}

/// POST /posts - validate, store an uploaded image if present, persist.
pub async fn store(state: web::Data<AppState>, payload: Multipart) -> AppResult<HttpResponse> {
    let form = read_post_form(payload).await?;
    let input = validate_create(form.title.as_deref(), form.body.as_deref())
        .map_err(AppError::from_field_errors)?;

    let featured_image = match form.featured_image {
        Some(file) => Some(
            state
                .blobs
                .put(FEATURED_IMAGE_PREFIX, &file.filename, &file.bytes)
                .await?,
        ),
        None => None,
    };

    let post = Post::new(input.title, input.body, featured_image);
    // A failed insert leaves the already-stored blob behind; there is no
    // cleanup on this path.
    state.posts.save(post).await?;

    Ok(redirect_to_index("Post created successfully!"))
}

/// GET /posts/{id} - the detail page.
pub async fn show(state: web::Data<AppState>, id: web::Path<Uuid>) -> AppResult<HttpResponse> {
    let post = find_post(&state, id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(Page::new(
        "Posts/Show",
        PostDetailProps {
            post: to_response(&post),
        },
    )))
}

/// GET /posts/{id}/edit - the edit form, pre-filled with the record.
pub async fn edit(state: web::Data<AppState>, id: web::Path<Uuid>) -> AppResult<HttpResponse> {
    let post = find_post(&state, id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(Page::new(
        "Posts/Edit",
        PostDetailProps {
            post: to_response(&post),
        },
    )))
}

/// PUT/PATCH /posts/{id} - replace validated fields, swap the image if a
/// new file was uploaded.
pub async fn update(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    payload: Multipart,
) -> AppResult<HttpResponse> {
    let mut post = find_post(&state, id.into_inner()).await?;

    let form = read_post_form(payload).await?;
    let input = validate_update(form.title.as_deref(), form.body.as_deref())
        .map_err(AppError::from_field_errors)?;

    if let Some(file) = form.featured_image {
        // Drop the previous blob before storing the replacement; deleting
        // an absent path is a no-op.
        if let Some(old_path) = post.featured_image.take() {
            state.blobs.delete(&old_path).await?;
        }

        let path = state
            .blobs
            .put(FEATURED_IMAGE_PREFIX, &file.filename, &file.bytes)
            .await?;
        post.featured_image = Some(path);
    }

    post.apply(input);
    // As with store: a failed write does not clean up a newly-stored blob.
    state.posts.save(post).await?;

    Ok(redirect_to_index("Post updated successfully!"))
}

/// DELETE /posts/{id} - remove the record and its blob.
pub async fn destroy(state: web::Data<AppState>, id: web::Path<Uuid>) -> AppResult<HttpResponse> {
    let post = find_post(&state, id.into_inner()).await?;

    if let Some(path) = &post.featured_image {
        state.blobs.delete(path).await?;
    }

    state.posts.delete(post.id).await?;

    Ok(redirect_to_index("Post deleted successfully!"))
}

async fn find_post(state: &AppState, id: Uuid) -> Result<Post, AppError> {
    state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| {
            DomainError::NotFound {
                entity_type: "post",
                id,
            }
            .into()
        })
}

fn to_response(post: &Post) -> PostResponse {
    PostResponse {
        id: post.id.to_string(),
        title: post.title.clone(),
        body: post.body.clone(),
        featured_image: post.featured_image.clone(),
        created_at: post.created_at.to_rfc3339(),
        updated_at: post.updated_at.to_rfc3339(),
    }
}

/// 303 back to the listing, success message riding in the response body.
fn redirect_to_index(message: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, "/posts"))
        .json(ApiResponse::message(message))
}

/// An uploaded file from the multipart form.
struct UploadedFile {
    filename: String,
    bytes: Vec<u8>,
}

/// Raw multipart fields before validation.
#[derive(Default)]
struct PostForm {
    title: Option<String>,
    body: Option<String>,
    featured_image: Option<UploadedFile>,
}

/// Collect the post form out of a multipart payload. Unknown fields are
/// ignored; a `featured_image` part without a filename or content counts
/// as "no file uploaded".
async fn read_post_form(mut payload: Multipart) -> Result<PostForm, AppError> {
    let mut form = PostForm::default();

    while let Some(mut field) = payload.try_next().await.map_err(bad_multipart)? {
        let (name, filename) = {
            let Some(cd) = field.content_disposition() else {
                continue;
            };
            match cd.get_name() {
                Some(name) => (name.to_owned(), cd.get_filename().map(str::to_owned)),
                None => continue,
            }
        };

        let mut data = Vec::new();
        while let Some(chunk) = field.try_next().await.map_err(bad_multipart)? {
            data.extend_from_slice(&chunk);
        }

        match name.as_str() {
            "title" => form.title = Some(text_field(data)?),
            "body" => form.body = Some(text_field(data)?),
            "featured_image" => {
                if let Some(filename) = filename {
                    if !data.is_empty() {
                        form.featured_image = Some(UploadedFile {
                            filename,
                            bytes: data,
                        });
                    }
                }
            }
            _ => {}
        }
    }

    Ok(form)
}

fn bad_multipart(err: actix_multipart::MultipartError) -> AppError {
    AppError::BadRequest(format!("Malformed multipart body: {err}"))
}

fn text_field(data: Vec<u8>) -> Result<String, AppError> {
    String::from_utf8(data)
        .map_err(|_| AppError::BadRequest("Form fields must be valid UTF-8".to_string()))
}
