mod guard;
mod temp_role;
