//! Portuguese (default) strings

pub const ENTRIES: &[(&str, &str)] = &[
    // common
    ("common.loading", "Carregando..."),
    ("common.error", "Erro"),
    ("common.success", "Sucesso"),
    ("common.cancel", "Cancelar"),
    ("common.save", "Salvar"),
    ("common.edit", "Editar"),
    ("common.delete", "Excluir"),
    ("common.confirm", "Confirmar"),
    ("common.close", "Fechar"),
    ("common.yes", "Sim"),
    ("common.no", "Não"),
    // auth
    ("auth.login", "Entrar"),
    ("auth.signup", "Cadastrar"),
    ("auth.logout", "Sair"),
    ("auth.username", "Nome de usuário"),
    ("auth.email", "E-mail"),
    ("auth.password", "Senha"),
    ("auth.newPassword", "Nova senha"),
    ("auth.changePassword", "Alterar senha"),
    ("auth.passwordChanged", "Senha alterada com sucesso"),
    ("auth.passwordChangeError", "Erro ao alterar senha"),
    ("auth.confirmPassword", "Confirmar senha"),
    ("auth.fullName", "Nome completo"),
    ("auth.role", "Tipo de usuário"),
    ("auth.user", "Usuário"),
    ("auth.admin", "Administrador"),
    ("auth.loginTitle", "Faça login"),
    ("auth.loginSubtitle", "Entre com suas credenciais"),
    ("auth.signupTitle", "Criar conta"),
    ("auth.signupSubtitle", "Preencha os dados para se cadastrar"),
    ("auth.alreadyHaveAccount", "Já tem conta?"),
    ("auth.dontHaveAccount", "Não tem conta?"),
    ("auth.loginHere", "Faça login"),
    ("auth.signupHere", "Cadastre-se"),
    ("auth.loginError", "Erro ao fazer login"),
    ("auth.signupError", "Erro ao criar conta"),
    ("auth.loginSuccess", "Login realizado com sucesso"),
    ("auth.signupSuccess", "Conta criada com sucesso"),
    // dashboard
    ("dashboard.title", "Dashboard"),
    ("dashboard.welcome", "Bem-vindo,"),
    ("dashboard.welcomeMessage", "Bem-vindo, {name}!"),
    ("dashboard.userInfo", "Informações do usuário"),
    ("dashboard.role", "Função"),
    ("dashboard.totalEntries", "Total de Comidas"),
    ("dashboard.safeEntries", "Comidas Seguras"),
    ("dashboard.unsafeEntries", "Comidas Não Seguras"),
    ("dashboard.foodEntries", "Comidas Registradas"),
    ("dashboard.noEntries", "Nenhuma Comida Encontrada."),
    ("dashboard.addEntry", "Nova Entrada"),
    ("dashboard.user", "Usuário"),
    ("dashboard.food", "Comida"),
    ("dashboard.quantity", "Quantidade"),
    ("dashboard.date", "Data"),
    ("dashboard.safe", "Seguro"),
    ("dashboard.unsafe", "Perigoso"),
    ("dashboard.actions", "Ações"),
    ("dashboard.invalidDate", "Data inválida"),
    ("dashboard.noDate", "Sem data"),
    ("dashboard.confirmDelete", "Excluir esta entrada?"),
    // forms
    ("forms.foodEntry.title", "Entrada de Comida"),
    ("forms.foodEntry.user", "Usuário"),
    ("forms.foodEntry.food", "Comida"),
    ("forms.foodEntry.foodPlaceholder", "Nome da comida"),
    ("forms.foodEntry.quantity", "Quantidade"),
    ("forms.foodEntry.date", "Data"),
    ("forms.foodEntry.isSafe", "É seguro?"),
    ("forms.foodEntry.create", "Criar Entrada"),
    ("forms.foodEntry.update", "Atualizar Entrada"),
    ("forms.foodEntry.creating", "Criando entrada..."),
    ("forms.foodEntry.updating", "Atualizando entrada..."),
    ("forms.foodEntry.success", "Entrada criada com sucesso"),
    ("forms.foodEntry.updateSuccess", "Entrada atualizada com sucesso"),
    ("forms.foodEntry.error", "Erro ao criar entrada"),
    ("forms.foodEntry.updateError", "Erro ao atualizar entrada"),
    // validation
    ("validation.required", "{field} é obrigatório"),
    ("validation.passwordMismatch", "Senhas não coincidem!"),
    ("validation.passwordTooShort", "A senha deve ter pelo menos {min} caracteres!"),
    ("validation.invalidEmail", "E-mail inválido"),
    ("validation.quantityMin", "A quantidade deve ser pelo menos 1"),
    ("validation.invalidDate", "Data inválida"),
    // admin
    ("admin.userManagement", "Gerenciar Usuários"),
    ("admin.userManagementSubtitle", "Visualize e altere as funções dos usuários"),
    ("admin.backToDashboard", "Voltar ao Dashboard"),
    ("admin.userList", "Lista de Usuários"),
    ("admin.noUsers", "Nenhum usuário encontrado."),
    ("admin.totalUsers", "Total de Usuários"),
    ("admin.admins", "Administradores"),
    ("admin.activeUsers", "Usuários Ativos"),
    ("admin.status", "Status"),
    ("admin.user", "Usuário"),
    ("admin.administrator", "Administrador"),
    ("admin.active", "Ativo"),
    ("admin.inactive", "Inativo"),
    ("admin.changeRole", "Alterar função"),
    ("admin.confirmRoleChange", "Alterar a função deste usuário para {role}?"),
    ("admin.loadingUsers", "Carregando usuários..."),
    ("admin.loadUsersError", "Erro ao carregar usuários"),
    ("admin.roleUpdateError", "Erro ao atualizar função"),
    ("admin.accessDenied", "Acesso negado"),
    // language
    ("language.select", "Selecionar idioma"),
    ("language.switch", "Switch to English"),
    ("language.portuguese", "Português"),
    ("language.english", "English"),
    // theme
    ("theme.light", "Ativar modo claro"),
    ("theme.dark", "Ativar modo escuro"),
    // logs
    ("logs.title", "Registros recentes"),
    ("logs.clear", "Limpar"),
    ("logs.empty", "Nenhum registro ainda."),
];
