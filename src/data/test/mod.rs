mod guild;
