//! English strings

pub const ENTRIES: &[(&str, &str)] = &[
    // common
    ("common.loading", "Loading..."),
    ("common.error", "Error"),
    ("common.success", "Success"),
    ("common.cancel", "Cancel"),
    ("common.save", "Save"),
    ("common.edit", "Edit"),
    ("common.delete", "Delete"),
    ("common.confirm", "Confirm"),
    ("common.close", "Close"),
    ("common.yes", "Yes"),
    ("common.no", "No"),
    // auth
    ("auth.login", "Login"),
    ("auth.signup", "Sign Up"),
    ("auth.logout", "Logout"),
    ("auth.username", "Username"),
    ("auth.email", "Email"),
    ("auth.password", "Password"),
    ("auth.newPassword", "New password"),
    ("auth.changePassword", "Change password"),
    ("auth.passwordChanged", "Password changed successfully"),
    ("auth.passwordChangeError", "Error changing password"),
    ("auth.confirmPassword", "Confirm password"),
    ("auth.fullName", "Full name"),
    ("auth.role", "User type"),
    ("auth.user", "User"),
    ("auth.admin", "Administrator"),
    ("auth.loginTitle", "Login"),
    ("auth.loginSubtitle", "Enter your credentials"),
    ("auth.signupTitle", "Create account"),
    ("auth.signupSubtitle", "Fill in the data to register"),
    ("auth.alreadyHaveAccount", "Already have an account?"),
    ("auth.dontHaveAccount", "Don't have an account?"),
    ("auth.loginHere", "Login here"),
    ("auth.signupHere", "Sign up here"),
    ("auth.loginError", "Login error"),
    ("auth.signupError", "Error creating account"),
    ("auth.loginSuccess", "Login successful"),
    ("auth.signupSuccess", "Account created successfully"),
    // dashboard
    ("dashboard.title", "Dashboard"),
    ("dashboard.welcome", "Welcome"),
    ("dashboard.welcomeMessage", "Welcome, {name}!"),
    ("dashboard.userInfo", "User information"),
    ("dashboard.role", "Role"),
    ("dashboard.totalEntries", "Total entries"),
    ("dashboard.safeEntries", "Safe entries"),
    ("dashboard.unsafeEntries", "Unsafe entries"),
    ("dashboard.foodEntries", "Food Entries"),
    ("dashboard.noEntries", "No entries found."),
    ("dashboard.addEntry", "New Entry"),
    ("dashboard.user", "User"),
    ("dashboard.food", "Food"),
    ("dashboard.quantity", "Quantity"),
    ("dashboard.date", "Date"),
    ("dashboard.safe", "Safe"),
    ("dashboard.unsafe", "Unsafe"),
    ("dashboard.actions", "Actions"),
    ("dashboard.invalidDate", "Invalid date"),
    ("dashboard.noDate", "No date"),
    ("dashboard.confirmDelete", "Delete this entry?"),
    // forms
    ("forms.foodEntry.title", "Food Entry"),
    ("forms.foodEntry.user", "User"),
    ("forms.foodEntry.food", "Food"),
    ("forms.foodEntry.foodPlaceholder", "Food name"),
    ("forms.foodEntry.quantity", "Quantity"),
    ("forms.foodEntry.date", "Date"),
    ("forms.foodEntry.isSafe", "Is safe?"),
    ("forms.foodEntry.create", "Create Entry"),
    ("forms.foodEntry.update", "Update Entry"),
    ("forms.foodEntry.creating", "Creating entry..."),
    ("forms.foodEntry.updating", "Updating entry..."),
    ("forms.foodEntry.success", "Entry created successfully"),
    ("forms.foodEntry.updateSuccess", "Entry updated successfully"),
    ("forms.foodEntry.error", "Error creating entry"),
    ("forms.foodEntry.updateError", "Error updating entry"),
    // validation
    ("validation.required", "{field} is required"),
    ("validation.passwordMismatch", "Passwords do not match!"),
    ("validation.passwordTooShort", "Password must be at least {min} characters!"),
    ("validation.invalidEmail", "Invalid email"),
    ("validation.quantityMin", "Quantity must be at least 1"),
    ("validation.invalidDate", "Invalid date"),
    // admin
    ("admin.userManagement", "User Management"),
    ("admin.userManagementSubtitle", "View users and change their roles"),
    ("admin.backToDashboard", "Back to Dashboard"),
    ("admin.userList", "User List"),
    ("admin.noUsers", "No users found."),
    ("admin.totalUsers", "Total users"),
    ("admin.admins", "Administrators"),
    ("admin.activeUsers", "Active users"),
    ("admin.status", "Status"),
    ("admin.user", "User"),
    ("admin.administrator", "Administrator"),
    ("admin.active", "Active"),
    ("admin.inactive", "Inactive"),
    ("admin.changeRole", "Change role"),
    ("admin.confirmRoleChange", "Change this user's role to {role}?"),
    ("admin.loadingUsers", "Loading users..."),
    ("admin.loadUsersError", "Error loading users"),
    ("admin.roleUpdateError", "Error updating role"),
    ("admin.accessDenied", "Access denied"),
    // language
    ("language.select", "Select language"),
    ("language.switch", "Mudar para Português"),
    ("language.portuguese", "Português"),
    ("language.english", "English"),
    // theme
    ("theme.light", "Switch to light mode"),
    ("theme.dark", "Switch to dark mode"),
    // logs
    ("logs.title", "Recent logs"),
    ("logs.clear", "Clear"),
    ("logs.empty", "No log lines yet."),
];
