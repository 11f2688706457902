pub fn render_confirmation(confirm_url: &str) -> String {
    format!(
        "Hi!\n\n\
         Follow this link to confirm your email address:\n\n\
         {confirm_url}\n\n\
         If you didn't create an account, you can ignore this email.\n"
    )
}

pub fn render_new_password(password: &str) -> String {
    format!(
        "A new password has been set on your account:\n\n\
         {password}\n\n\
         Log in and change it if you'd like something memorable.\n"
    )
}
