use super::*;
use crate::web::memory;
use mhs_core::usecases::{self, Enrollment};

fn required_email(email: Option<String>) -> result::Result<String, ApiError> {
    email.ok_or(ApiError::MissingQueryParameter("email"))
}

#[get("/activities")]
pub fn get_activities(connections: memory::Connections) -> Result<json::Activities> {
    let activities = usecases::list_activities(&connections.shared())?;
    Ok(Json(activities.into()))
}

#[post("/activities/<activity_name>/signup?<email>")]
pub fn post_signup(
    connections: memory::Connections,
    activity_name: &str,
    email: Option<String>,
) -> Result<json::Message> {
    let email = required_email(email)?;
    let Enrollment { activity, email } =
        usecases::sign_up_for_activity(&connections.exclusive(), activity_name, email.into())?;
    Ok(Json(json::Message {
        message: format!("Signed up {email} for {activity}"),
    }))
}

#[delete("/activities/<activity_name>/unregister?<email>")]
pub fn delete_unregister(
    connections: memory::Connections,
    activity_name: &str,
    email: Option<String>,
) -> Result<json::Message> {
    let email = required_email(email)?;
    let Enrollment { activity, email } = usecases::unregister_from_activity(
        &connections.exclusive(),
        activity_name,
        email.into(),
    )?;
    Ok(Json(json::Message {
        message: format!("Unregistered {email} from {activity}"),
    }))
}
