mod update_todos;
