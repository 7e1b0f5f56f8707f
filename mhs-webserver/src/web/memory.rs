use mhs_db_memory::{Connections as Directory, DbReadOnly, DbReadWrite};
use rocket::{
    outcome::try_outcome,
    request::{FromRequest, Outcome},
    Request, State,
};

// Wrapper to be able to implement `FromRequest`
#[derive(Clone)]
pub struct Connections(Directory);

impl Connections {
    pub fn shared(&self) -> DbReadOnly<'_> {
        self.0.shared()
    }

    pub fn exclusive(&self) -> DbReadWrite<'_> {
        self.0.exclusive()
    }
}

impl From<Directory> for Connections {
    fn from(conn: Directory) -> Self {
        Self(conn)
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Connections {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let connections = try_outcome!(request.guard::<&State<Connections>>().await);
        Outcome::Success(connections.inner().clone())
    }
}
