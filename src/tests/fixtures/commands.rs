use crate::modules::activities::use_cases::sign_up_for_activity::command::SignUpForActivity;
use crate::modules::activities::use_cases::unregister_from_activity::command::UnregisterFromActivity;
use crate::tests::fixtures::activities::email;

const REQUESTED_AT: i64 = 1_700_000_000_000;

pub struct SignUpForActivityBuilder {
    inner: SignUpForActivity,
}

impl Default for SignUpForActivityBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SignUpForActivityBuilder {
    pub fn new() -> Self {
        Self {
            inner: SignUpForActivity {
                activity_name: "Chess Club".to_string(),
                email: email("newstudent@mergington.edu"),
                requested_at: REQUESTED_AT,
            },
        }
    }

    pub fn activity_name(mut self, v: impl Into<String>) -> Self {
        self.inner.activity_name = v.into();
        self
    }

    pub fn email(mut self, v: &str) -> Self {
        self.inner.email = email(v);
        self
    }

    pub fn build(self) -> SignUpForActivity {
        self.inner
    }
}

pub struct UnregisterFromActivityBuilder {
    inner: UnregisterFromActivity,
}

impl Default for UnregisterFromActivityBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl UnregisterFromActivityBuilder {
    pub fn new() -> Self {
        Self {
            inner: UnregisterFromActivity {
                activity_name: "Chess Club".to_string(),
                email: email("michael@mergington.edu"),
                requested_at: REQUESTED_AT,
            },
        }
    }

    pub fn activity_name(mut self, v: impl Into<String>) -> Self {
        self.inner.activity_name = v.into();
        self
    }

    pub fn email(mut self, v: &str) -> Self {
        self.inner.email = email(v);
        self
    }

    pub fn build(self) -> UnregisterFromActivity {
        self.inner
    }
}
