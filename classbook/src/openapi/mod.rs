//! OpenAPI documentation for the classbook HTTP API, rendered by Scalar at `/docs`.

use utoipa::OpenApi;

use crate::api;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "classbook",
        description = "Student records and class enrollments backed by PostgreSQL."
    ),
    paths(
        api::handlers::welcome::welcome,
        api::handlers::students::create_student,
        api::handlers::students::update_student,
        api::handlers::students::get_student,
        api::handlers::students::delete_student,
        api::handlers::class_info::create_class_info,
        api::handlers::class_info::update_class_info,
        api::handlers::class_info::get_class_info,
        api::handlers::class_info::delete_class_info,
    ),
    components(
        schemas(
            api::models::students::StudentCreate,
            api::models::students::StudentUpdate,
            api::models::students::StudentCreatedResponse,
            api::models::students::StudentResponse,
            api::models::class_info::ClassInfoCreate,
            api::models::class_info::ClassInfoUpdate,
            api::models::class_info::ClassInfoResponse,
        )
    ),
    tags(
        (name = "health", description = "Liveness"),
        (name = "students", description = "Student records"),
        (name = "classes", description = "Class enrollments, addressed by student"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();

        for expected in ["/", "/student", "/student/{student_id}", "/class_info", "/class_info/{student_id}"] {
            assert!(paths.contains(&expected), "missing {expected} in {paths:?}");
        }

        let student = &doc.paths.paths["/student"];
        assert!(student.post.is_some());
        assert!(student.put.is_some());
        let by_id = &doc.paths.paths["/class_info/{student_id}"];
        assert!(by_id.get.is_some());
        assert!(by_id.delete.is_some());
    }
}
